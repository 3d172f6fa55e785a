/// Policy limits applied to every command.
///
/// None of these are arithmetic necessities: the engine works in arbitrary
/// precision, so the bounds only describe what the calculator agrees to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted Fibonacci index.
    pub fibonacci_max: i32,
    /// Largest accepted argument for factorial and e approximation.
    pub argument_max: i32,
    /// Fractional digits printed for the e approximation.
    pub scale: u32,
}

pub const DEFAULT_FIBONACCI_MAX: i32 = 40;
pub const DEFAULT_SCALE: u32 = 20;
/// Widest scale that stays inside `bigdecimal`'s default 100-digit division precision.
pub const MAX_SCALE: u32 = 80;

impl Default for Limits {
    fn default() -> Self {
        Limits {
            fibonacci_max: DEFAULT_FIBONACCI_MAX,
            argument_max: i32::MAX,
            scale: DEFAULT_SCALE,
        }
    }
}
