use crate::error::{CoreError, CoreResult};

/// Rotate `staff` left by `offset` positions, wrapping in both directions.
///
/// The element at `offset mod len` comes first, so offset 1 on `[X, Y, Z]`
/// gives `[Y, Z, X]` and offset -1 gives `[Z, X, Y]`.
pub fn rotate_staff<S: Clone>(staff: &[S], offset: i64) -> CoreResult<Vec<S>> {
    if staff.is_empty() {
        return Err(CoreError::InvalidRotation);
    }

    let shift = offset.rem_euclid(staff.len() as i64) as usize;
    let mut rotated = staff.to_vec();
    rotated.rotate_left(shift);
    Ok(rotated)
}
