use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use thiserror::Error;
use tracing::debug;

use crate::Limits;

/// Extra fractional digits each term keeps beyond the printed scale.
pub const GUARD_DIGITS: i64 = 10;

/// An argument fell outside the domain of the requested sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Fibonacci Error: Range is [0, {max}].")]
    Fibonacci { max: i32 },
    #[error("Factorial Error: Number must be between 0 and {max}.")]
    Factorial { max: i32 },
    #[error("E Number Error: Valid e iterations range is [1, {max}].")]
    Euler { max: i32 },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    limits: Limits,
}

impl Engine {
    pub fn new(limits: Limits) -> Self {
        Engine { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// F(0) = 0, F(1) = 1, F(k) = F(k-1) + F(k-2).
    pub fn fibonacci(&self, n: i32) -> Result<BigUint, DomainError> {
        let max = self.limits.fibonacci_max;
        if !(0..=max).contains(&n) {
            return Err(DomainError::Fibonacci { max });
        }

        let mut current = BigUint::zero();
        let mut next = BigUint::one();
        for _ in 0..n {
            let sum = &current + &next;
            current = std::mem::replace(&mut next, sum);
        }
        debug!(n, "fibonacci computed");
        Ok(current)
    }

    /// Large arguments are accepted and simply take a long time.
    pub fn factorial(&self, n: i32) -> Result<BigUint, DomainError> {
        let max = self.limits.argument_max;
        if !(0..=max).contains(&n) {
            return Err(DomainError::Factorial { max });
        }
        debug!(n, "computing factorial");
        Ok(product(n as u32))
    }

    /// Partial sum of 1/i! for i in 0..=n, printed at the configured scale.
    ///
    /// Terms are rounded half up at `scale + GUARD_DIGITS` fractional digits
    /// and the sum is rounded half up once at the end.
    pub fn euler(&self, n: i32) -> Result<BigDecimal, DomainError> {
        let max = self.limits.argument_max;
        if !(1..=max).contains(&n) {
            return Err(DomainError::Euler { max });
        }

        let scale = i64::from(self.limits.scale);
        let working = scale + GUARD_DIGITS;
        let mut factorial = BigUint::one();
        let mut sum = BigDecimal::one();
        for i in 1..=n as u32 {
            factorial *= i;
            let term = (BigDecimal::one() / BigDecimal::from(BigInt::from(factorial.clone())))
                .with_scale_round(working, RoundingMode::HalfUp);
            // terms shrink monotonically, so nothing after this can contribute
            if term.is_zero() {
                debug!(n, stopped_at = i, "e approximation converged");
                break;
            }
            sum += term;
        }
        Ok(sum.with_scale_round(scale, RoundingMode::HalfUp))
    }
}

fn product(n: u32) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * i)
}
