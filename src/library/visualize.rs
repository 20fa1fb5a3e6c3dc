//! Images and colors.

use crate::call::{Call, Shape};
use crate::func::Func;
use crate::library::{element, setters, standard};
use crate::value::{Ratio, Value};

/// `image`.
pub static IMAGE: Func = Func::new(standard!("visualize/", "image", "image", "image/"));
/// `rgb`.
pub static RGB: Func = Func::new(standard!("visualize/", "rgb", "rgb", "color/#definitions-rgb"));
/// `luma`.
pub static LUMA: Func = Func::new(standard!("visualize/", "luma", "luma", "color/#definitions-luma"));
/// `cmyk`.
pub static CMYK: Func = Func::new(standard!("visualize/", "cmyk", "cmyk", "color/#definitions-cmyk"));
/// `lighten`.
pub static COLOR_LIGHTEN: Func =
    Func::new(standard!("visualize/", "color_lighten", "lighten", "color/#definitions-lighten"));
/// `darken`.
pub static COLOR_DARKEN: Func =
    Func::new(standard!("visualize/", "color_darken", "darken", "color/#definitions-darken"));
/// `negate`.
pub static COLOR_NEGATE: Func =
    Func::new(standard!("visualize/", "color_negate", "negate", "color/#definitions-negate"));

/// Primary functions of this module.
pub static FUNCTIONS: &[&Func] = &[
    &IMAGE,
    &RGB,
    &LUMA,
    &CMYK,
    &COLOR_LIGHTEN,
    &COLOR_DARKEN,
    &COLOR_NEGATE,
];

element! {
    /// `image`: a raster or vector graphic.
    Image
}

/// An image loaded from `source`.
pub fn image(source: impl Into<String>) -> Image {
    let source: String = source.into();
    Image {
        call: Call::new(&IMAGE, Shape::Normal).body(source),
    }
}

impl Image {
    setters! {
        /// `"png"`, `"jpg"`, `"gif"`, `"svg"` or `auto`.
        format: Value;
        /// Width, a length or ratio.
        width: Value;
        /// Height, a length or ratio.
        height: Value;
        /// Alternative text.
        alt: Value;
        /// `"cover"`, `"contain"` or `"stretch"`.
        fit: Value;
        /// `"smooth"` or `"pixelated"`.
        scaling: Value;
    }
}

// =============================================================================
// Colors
// =============================================================================

element! {
    /// A color constructor call.
    ///
    /// ```
    /// use typst_builder::library::visualize::{lighten, rgb};
    /// use typst_builder::library::Element;
    /// use typst_builder::Ratio;
    ///
    /// assert_eq!(rgb(255, 0, 0).render().unwrap(), "#rgb(255, 0, 0)");
    /// assert_eq!(
    ///     lighten(rgb(255, 0, 0), Ratio::new(50.0)).render().unwrap(),
    ///     "#rgb(255, 0, 0).lighten(50%)"
    /// );
    /// ```
    Color
}

/// An RGB color from 8-bit components.
pub fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color {
        call: Call::new(&RGB, Shape::Positional).args([red, green, blue]),
    }
}

/// An RGB color from a hex string such as `"#ff0000"`.
pub fn rgb_hex(hex: impl Into<String>) -> Color {
    let hex: String = hex.into();
    Color {
        call: Call::new(&RGB, Shape::Positional).arg(hex),
    }
}

/// A grayscale color.
pub fn luma(lightness: u8) -> Color {
    Color {
        call: Call::new(&LUMA, Shape::Positional).arg(lightness),
    }
}

/// A CMYK color from component ratios.
pub fn cmyk(cyan: Ratio, magenta: Ratio, yellow: Ratio, key: Ratio) -> Color {
    Color {
        call: Call::new(&CMYK, Shape::Positional).args([cyan, magenta, yellow, key]),
    }
}

impl Color {
    /// Append an alpha component.
    pub fn alpha(mut self, alpha: impl Into<Value>) -> Self {
        self.call = self.call.arg(alpha);
        self
    }
}

/// `color.lighten(factor)`.
pub fn lighten(color: impl Into<Value>, factor: Ratio) -> Color {
    Color {
        call: Call::instance(&COLOR_LIGHTEN, color).arg(factor),
    }
}

/// `color.darken(factor)`.
pub fn darken(color: impl Into<Value>, factor: Ratio) -> Color {
    Color {
        call: Call::instance(&COLOR_DARKEN, color).arg(factor),
    }
}

/// `color.negate()`.
pub fn negate(color: impl Into<Value>) -> Color {
    Color {
        call: Call::instance(&COLOR_NEGATE, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Element;
    use crate::value::Length;

    #[test]
    fn test_image() {
        let code = image("image.png")
            .width(Ratio::new(70.0))
            .height(Length::cm(4.0))
            .render()
            .unwrap();
        assert_eq!(code, r#"#image("image.png", width: 70%, height: 4cm)"#);
    }

    #[test]
    fn test_color_constructors() {
        assert_eq!(rgb(255, 255, 255).alpha(Ratio::new(50.0)).render().unwrap(), "#rgb(255, 255, 255, 50%)");
        assert_eq!(rgb_hex("#fffd11a1").render().unwrap(), r##"#rgb("#fffd11a1")"##);
        assert_eq!(luma(128).render().unwrap(), "#luma(128)");
        let code = cmyk(Ratio::new(27.0), Ratio::new(0.0), Ratio::new(3.0), Ratio::new(5.0))
            .render()
            .unwrap();
        assert_eq!(code, "#cmyk(27%, 0%, 3%, 5%)");
    }

    #[test]
    fn test_color_methods_chain() {
        let code = negate(darken(luma(200), Ratio::new(10.0))).render().unwrap();
        assert_eq!(code, "#luma(200).darken(10%).negate()");
    }

    #[test]
    fn test_instance_on_rendered_receiver() {
        let code = lighten(Value::raw("#rgb(0, 0, 255)"), Ratio::new(25.5)).render().unwrap();
        assert_eq!(code, "#rgb(0, 0, 255).lighten(25.5%)");
    }
}
