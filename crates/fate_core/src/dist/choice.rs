//! Element selection and shuffling.

use crate::error::{Result, RngError};
use crate::uniform::UniformSource;

pub(crate) fn item<'a, R: UniformSource + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T> {
    if items.is_empty() {
        return Err(RngError::invalid_argument(
            "items",
            "cannot choose from an empty slice",
        ));
    }
    let len = i32::try_from(items.len()).map_err(|_| {
        RngError::invalid_argument(
            "items",
            format!("length {} exceeds the integer range", items.len()),
        )
    })?;
    let index = rng.int(len)?;
    Ok(&items[index as usize])
}

pub(crate) fn shuffle<R: UniformSource + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let bound = i32::try_from(i).unwrap_or(i32::MAX);
        let j = rng.sample_int(0, bound) as usize;
        items.swap(i, j);
    }
}
