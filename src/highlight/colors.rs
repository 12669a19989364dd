//! Rose Pine Color Palette Module
//! Based on the official Rose Pine theme: https://rosepinetheme.com/

use colored::Color;
pub struct RosePine;

impl RosePine {
    pub const TEXT: Color = Color::TrueColor {
        r: 224,
        g: 222,
        b: 244,
    };
    pub const MUTED: Color = Color::TrueColor {
        r: 110,
        g: 106,
        b: 134,
    };
    pub const LOVE: Color = Color::TrueColor {
        r: 235,
        g: 111,
        b: 146,
    };
    pub const GOLD: Color = Color::TrueColor {
        r: 246,
        g: 193,
        b: 119,
    };
    pub const ROSE: Color = Color::TrueColor {
        r: 235,
        g: 188,
        b: 186,
    };
    pub const PINE: Color = Color::TrueColor {
        r: 49,
        g: 116,
        b: 143,
    };
    pub const FOAM: Color = Color::TrueColor {
        r: 156,
        g: 207,
        b: 216,
    };
    pub const IRIS: Color = Color::TrueColor {
        r: 196,
        g: 167,
        b: 231,
    };
}
