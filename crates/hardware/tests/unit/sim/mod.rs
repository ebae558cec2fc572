/// Breakpoint set and the step-past protocol.
pub mod breakpoints;


/// Machine lifecycle, run loop and dumps.
pub mod machine;
