use framekit_ipc::TitleDirection;

/// Number of buttons a single title bar group can hold.
pub const MAX_BUTTONS_PER_SIDE: u8 = 5;

#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    #[knuffel(child, unwrap(argument), default = Self::default().border_width)]
    pub border_width: u16,
    #[knuffel(child, unwrap(argument), default = Self::default().corner_size)]
    pub corner_size: u16,
    #[knuffel(child)]
    pub no_border: bool,
    #[knuffel(child)]
    pub no_handles: bool,
    #[knuffel(child)]
    pub hidden_handles: bool,
    #[knuffel(child, default)]
    pub title: Title,
    #[knuffel(child, default)]
    pub buttons: Buttons,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            border_width: 4,
            corner_size: 20,
            no_border: false,
            no_handles: false,
            hidden_handles: false,
            title: Title::default(),
            buttons: Buttons::default(),
        }
    }
}

#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Title {
    #[knuffel(child)]
    pub off: bool,
    #[knuffel(child, unwrap(argument, str), default = TitleDirection::Top)]
    pub position: TitleDirection,
    #[knuffel(child, unwrap(argument), default = Self::default().thickness)]
    pub thickness: u16,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            off: false,
            position: TitleDirection::Top,
            thickness: 18,
        }
    }
}

#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buttons {
    #[knuffel(child, unwrap(argument), default = Self::default().left)]
    pub left: u8,
    #[knuffel(child, unwrap(argument), default = Self::default().right)]
    pub right: u8,
}

impl Default for Buttons {
    fn default() -> Self {
        Self { left: 1, right: 1 }
    }
}

impl Buttons {
    /// Left group size, capped at [`MAX_BUTTONS_PER_SIDE`].
    pub fn left(&self) -> u8 {
        self.left.min(MAX_BUTTONS_PER_SIDE)
    }

    /// Right group size, capped at [`MAX_BUTTONS_PER_SIDE`].
    pub fn right(&self) -> u8 {
        self.right.min(MAX_BUTTONS_PER_SIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_counts_are_capped() {
        let buttons = Buttons { left: 9, right: 2 };
        assert_eq!(buttons.left(), MAX_BUTTONS_PER_SIDE);
        assert_eq!(buttons.right(), 2);
    }
}
