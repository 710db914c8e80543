use framekit_ipc::ResizeMode;

#[derive(knuffel::Decode, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    #[knuffel(child, unwrap(argument, str), default)]
    pub mode: ResizeMode,
    /// Animation steps for interactive resizes.
    ///
    /// A positive value is the number of steps, a negative value `-k` animates in increments of
    /// `k` pixels, zero jumps directly to the end.
    #[knuffel(child, unwrap(argument), default)]
    pub animation_steps: i32,
}
