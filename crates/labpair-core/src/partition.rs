use crate::error::{CoreError, CoreResult};

/// Split `items` into exactly `groups` contiguous slices.
///
/// Every slice holds `len / groups` or `len / groups + 1` items, with the
/// larger slices first. When there are fewer items than groups the trailing
/// slices are empty.
pub fn divide_evenly<T>(items: &[T], groups: usize) -> CoreResult<Vec<&[T]>> {
    if groups == 0 {
        return Err(CoreError::InvalidPartition(groups));
    }

    let base = items.len() / groups;
    let remainder = items.len() % groups;

    let mut out = Vec::with_capacity(groups);
    let mut start = 0;
    for index in 0..groups {
        let size = if index < remainder { base + 1 } else { base };
        out.push(&items[start..start + size]);
        start += size;
    }
    Ok(out)
}
