use crate::error::EngineError;

pub fn safe_add(a: u64, b: u64) -> Result<u64, EngineError> {
    a.checked_add(b).ok_or(EngineError::MathOverflow)
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64, EngineError> {
    a.checked_sub(b).ok_or(EngineError::MathOverflow)
}

pub fn update_supply(current: u64, amount: u64, increase: bool) -> Result<u64, EngineError> {
    if increase {
        safe_add(current, amount)
    } else {
        safe_sub(current, amount)
    }
}
