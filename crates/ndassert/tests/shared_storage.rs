use std::thread;

use ndassert::{
    assert_almost_equals, assert_arrays_equal, assert_in_place, assert_non_zero_number,
    assert_panics, NdArray, NumericArray, Scalar,
};

#[test]
fn checks_still_read_an_array_after_a_panicking_update() {
    let array = NdArray::vector(vec![1.0, 2.0]);
    let handle = array.clone();

    assert!(assert_panics(|| {
        handle.map_in_place(|_| panic!("update aborted"));
    })
    .is_ok());

    assert_eq!(array.to_f64_vec(), vec![1.0, 2.0]);
    assert!(assert_arrays_equal(&array, &array.duplicate()).is_ok());
    assert!(assert_non_zero_number(&array, 2).is_ok());

    array.fill(3.0);
    assert!(assert_almost_equals(&NdArray::vector(vec![3.0, 3.0]), &handle).is_ok());
}

#[test]
fn storage_survives_a_writer_thread_that_panicked() {
    let array = NdArray::vector(vec![1, 2, 3]);
    let handle = array.clone();

    let outcome = thread::spawn(move || {
        handle.map_in_place(|value| match value {
            Scalar::Int(3) => panic!("bad element"),
            Scalar::Int(v) => Scalar::Int(v * 10),
            other => other,
        });
    })
    .join();
    assert!(outcome.is_err());

    assert_eq!(
        array.to_scalars(),
        vec![Scalar::Int(10), Scalar::Int(20), Scalar::Int(3)]
    );
    let updated = array.set(2, 30).expect("index in range");
    assert!(assert_in_place(&array, updated).is_ok());
    assert_eq!(array.to_f64_vec(), vec![10.0, 20.0, 30.0]);
}
