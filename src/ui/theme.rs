use crossterm::style::Color;

pub struct Theme {
    pub error: Color,    // Red
    pub location: Color, // Cyan
    pub caret: Color,    // Yellow
    pub prompt: Color,   // Blue
    pub comment: Color,  // Grey
}

pub const DEFAULT_THEME: Theme = Theme {
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    location: Color::Rgb {
        r: 148,
        g: 226,
        b: 213,
    },
    caret: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    },
    prompt: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    comment: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
};
