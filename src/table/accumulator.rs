// Thu Aug 27 2026 - Alex

use thiserror::Error;

use crate::table::frequency::FrequencyTable;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid age: {age}")]
pub struct InvalidAgeError {
    pub age: i32,
}

/// Consumes every age from the stream in order, counting each into the
/// table. Fails on the first negative value without consuming further
/// elements; increments applied before the failure stay in the table.
/// Returns the number of ages consumed.
///
/// Safe to run from several workers against one shared table; the table
/// handles the interleaving.
pub fn accumulate<I>(ages: I, table: &FrequencyTable) -> Result<u64, InvalidAgeError>
where
    I: IntoIterator<Item = i32>,
{
    let mut consumed = 0u64;
    for age in ages {
        if age < 0 {
            return Err(InvalidAgeError { age });
        }
        table.increment(age as u32);
        consumed += 1;
    }
    Ok(consumed)
}
