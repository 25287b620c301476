use ll_shared_kernel::FileSize;

#[test]
fn to_human_unit_boundaries() {
    let one_tb = 1000_u64.pow(4);
    assert_eq!(FileSize::from(one_tb - 1).to_human(), "1000 GB");
    assert_eq!(FileSize::from(one_tb).to_human(), "1.0 TB");
    assert_eq!(FileSize::from(u64::MAX).to_human(), "18 EB");
}

#[test]
fn sum_saturates_instead_of_wrapping() {
    let total: FileSize = [FileSize::from(u64::MAX), FileSize::from(1)].into_iter().sum();
    assert_eq!(total.bytes(), u64::MAX);
}
