//! Color spaces.
//!
//! Each space is a plain struct whose constructor validates every channel
//! and whose setters re-validate. Only [`Srgb`] projects to RGB; the other
//! spaces are declared so configurations can name them, and their
//! `to_rgb` reports [`ColorError::UnimplementedColorSpace`]. Reaching that
//! error is a configuration mistake, not a rendering fault.

use crate::channel::{validate, Channel, ChannelRange};
use crate::color::Rgb;
use crate::error::{ColorError, Result};

fn channel_u8(name: &'static str, value: i64) -> Result<u8> {
    validate(name, value as f64, ChannelRange::UINT8)?;
    Ok(value as u8)
}

fn opaque() -> Channel {
    Channel::trusted("alpha", 1.0, ChannelRange::UNIT)
}

/// Standard sRGB with 8-bit channels and a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Channel,
}

impl Srgb {
    /// Display name.
    pub const NAME: &'static str = "sRGB";

    /// Create an opaque color from raw integers, validating each channel.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self> {
        Ok(Self {
            red: channel_u8("red", red)?,
            green: channel_u8("green", green)?,
            blue: channel_u8("blue", blue)?,
            alpha: opaque(),
        })
    }

    /// Create an opaque color from bytes. Cannot fail.
    #[must_use]
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: opaque(),
        }
    }

    /// Replace alpha, validating it against [0, 1].
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        self.alpha.set(alpha)?;
        Ok(self)
    }

    /// Build from another space's RGB projection, keeping its alpha.
    pub fn from_space(space: &ColorSpace) -> Result<Self> {
        let rgb = space.to_rgb()?;
        Self::rgb(rgb.r, rgb.g, rgb.b).with_alpha(space.alpha())
    }

    /// Red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Alpha channel.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha.get()
    }

    /// Set red; out-of-range values leave the color untouched.
    pub fn set_red(&mut self, value: i64) -> Result<()> {
        self.red = channel_u8("red", value)?;
        Ok(())
    }

    /// Set green.
    pub fn set_green(&mut self, value: i64) -> Result<()> {
        self.green = channel_u8("green", value)?;
        Ok(())
    }

    /// Set blue.
    pub fn set_blue(&mut self, value: i64) -> Result<()> {
        self.blue = channel_u8("blue", value)?;
        Ok(())
    }

    /// Set alpha.
    pub fn set_alpha(&mut self, value: f64) -> Result<()> {
        self.alpha.set(value)
    }

    /// Identity projection of the three color channels.
    #[must_use]
    pub const fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }
}

/// Declares a color space without an RGB conversion.
///
/// Generates the struct, a validating `new`, `with_alpha`, per-channel
/// getters and re-validating setters.
macro_rules! declared_space {
    (
        $(#[$meta:meta])*
        $ty:ident, $label:literal {
            $( $field:ident, $setter:ident: $range:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $ty {
            $( $field: Channel, )+
            alpha: Channel,
        }

        impl $ty {
            /// Display name.
            pub const NAME: &'static str = $label;

            /// Create an opaque color, validating every channel.
            pub fn new($( $field: f64 ),+) -> Result<Self> {
                Ok(Self {
                    $( $field: Channel::new(stringify!($field), $field, $range)?, )+
                    alpha: opaque(),
                })
            }

            /// Replace alpha, validating it against [0, 1].
            pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
                self.alpha.set(alpha)?;
                Ok(self)
            }

            $(
                #[doc = concat!("The `", stringify!($field), "` channel.")]
                #[must_use]
                pub const fn $field(&self) -> f64 {
                    self.$field.get()
                }

                #[doc = concat!("Set the `", stringify!($field), "` channel, re-validating it.")]
                pub fn $setter(&mut self, value: f64) -> Result<()> {
                    self.$field.set(value)
                }
            )+

            /// Alpha channel.
            #[must_use]
            pub const fn alpha(&self) -> f64 {
                self.alpha.get()
            }

            /// Set alpha.
            pub fn set_alpha(&mut self, value: f64) -> Result<()> {
                self.alpha.set(value)
            }

            /// Not implemented for this space.
            pub fn to_rgb(&self) -> Result<Rgb> {
                Err(ColorError::UnimplementedColorSpace { space: Self::NAME })
            }
        }

        impl From<$ty> for ColorSpace {
            fn from(space: $ty) -> Self {
                Self::$ty(space)
            }
        }
    };
}

declared_space!(
    /// Hue, saturation, value.
    Hsv, "HSV" {
        hue, set_hue: ChannelRange::DEGREES,
        saturation, set_saturation: ChannelRange::UNIT,
        value, set_value: ChannelRange::UNIT,
    }
);

declared_space!(
    /// Hue, saturation, lightness.
    Hsl, "HSL" {
        hue, set_hue: ChannelRange::DEGREES,
        saturation, set_saturation: ChannelRange::UNIT,
        lightness, set_lightness: ChannelRange::UNIT,
    }
);

declared_space!(
    /// Hue, whiteness, blackness.
    Hwb, "HWB" {
        hue, set_hue: ChannelRange::DEGREES,
        whiteness, set_whiteness: ChannelRange::UNIT,
        blackness, set_blackness: ChannelRange::UNIT,
    }
);

declared_space!(
    /// Display P3 with 8-bit channels.
    DisplayP3, "Display P3" {
        red, set_red: ChannelRange::UINT8,
        green, set_green: ChannelRange::UINT8,
        blue, set_blue: ChannelRange::UINT8,
    }
);

declared_space!(
    /// ITU-R BT.2020 with 8-bit channels.
    Rec2020, "Rec. 2020" {
        red, set_red: ChannelRange::UINT8,
        green, set_green: ChannelRange::UINT8,
        blue, set_blue: ChannelRange::UINT8,
    }
);

declared_space!(
    /// Adobe RGB (1998) with 8-bit channels.
    A98Rgb, "A98 RGB" {
        red, set_red: ChannelRange::UINT8,
        green, set_green: ChannelRange::UINT8,
        blue, set_blue: ChannelRange::UINT8,
    }
);

declared_space!(
    /// ProPhoto RGB with 8-bit channels.
    ProPhotoRgb, "ProPhoto RGB" {
        red, set_red: ChannelRange::UINT8,
        green, set_green: ChannelRange::UINT8,
        blue, set_blue: ChannelRange::UINT8,
    }
);

declared_space!(
    /// CIE L*a*b*.
    Cielab, "CIELAB" {
        lightness, set_lightness: ChannelRange::PERCENT,
        a, set_a: ChannelRange::LAB_AXIS,
        b, set_b: ChannelRange::LAB_AXIS,
    }
);

declared_space!(
    /// CIE LCh.
    Lch, "LCH" {
        lightness, set_lightness: ChannelRange::PERCENT,
        chroma, set_chroma: ChannelRange::PERCENT,
        hue, set_hue: ChannelRange::DEGREES,
    }
);

declared_space!(
    /// Oklab.
    Oklab, "Oklab" {
        lightness, set_lightness: ChannelRange::PERCENT,
        a, set_a: ChannelRange::OKLAB_AXIS,
        b, set_b: ChannelRange::OKLAB_AXIS,
    }
);

declared_space!(
    /// Oklch.
    Oklch, "Oklch" {
        lightness, set_lightness: ChannelRange::PERCENT,
        chroma, set_chroma: ChannelRange::OKLCH_CHROMA,
        hue, set_hue: ChannelRange::DEGREES,
    }
);

declared_space!(
    /// CIE XYZ under the D65 white point.
    XyzD65, "XYZ D65" {
        x, set_x: ChannelRange::X_D65,
        y, set_y: ChannelRange::PERCENT,
        z, set_z: ChannelRange::Z_D65,
    }
);

declared_space!(
    /// CIE XYZ under the D50 white point.
    XyzD50, "XYZ D50" {
        x, set_x: ChannelRange::X_D50,
        y, set_y: ChannelRange::PERCENT,
        z, set_z: ChannelRange::Z_D50,
    }
);

declared_space!(
    /// Linear-light sRGB with unit channels.
    SrgbLinear, "sRGB linear" {
        red, set_red: ChannelRange::UNIT,
        green, set_green: ChannelRange::UNIT,
        blue, set_blue: ChannelRange::UNIT,
    }
);

declared_space!(
    /// Cyan, magenta, yellow, key.
    Cmyk, "CMYK" {
        cyan, set_cyan: ChannelRange::UNIT,
        magenta, set_magenta: ChannelRange::UNIT,
        yellow, set_yellow: ChannelRange::UNIT,
        black, set_black: ChannelRange::UNIT,
    }
);

/// The closed set of supported color spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpace {
    /// sRGB, the only space with an RGB conversion.
    Srgb(Srgb),
    /// HSV.
    Hsv(Hsv),
    /// HSL.
    Hsl(Hsl),
    /// HWB.
    Hwb(Hwb),
    /// Display P3.
    DisplayP3(DisplayP3),
    /// Rec. 2020.
    Rec2020(Rec2020),
    /// Adobe RGB (1998).
    A98Rgb(A98Rgb),
    /// ProPhoto RGB.
    ProPhotoRgb(ProPhotoRgb),
    /// CIELAB.
    Cielab(Cielab),
    /// LCH.
    Lch(Lch),
    /// Oklab.
    Oklab(Oklab),
    /// Oklch.
    Oklch(Oklch),
    /// XYZ D65.
    XyzD65(XyzD65),
    /// XYZ D50.
    XyzD50(XyzD50),
    /// Linear sRGB.
    SrgbLinear(SrgbLinear),
    /// CMYK.
    Cmyk(Cmyk),
}

impl ColorSpace {
    /// Project to an 8-bit RGB triple.
    ///
    /// # Errors
    ///
    /// Every space except sRGB returns [`ColorError::UnimplementedColorSpace`].
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Self::Srgb(c) => Ok(c.to_rgb()),
            Self::Hsv(c) => c.to_rgb(),
            Self::Hsl(c) => c.to_rgb(),
            Self::Hwb(c) => c.to_rgb(),
            Self::DisplayP3(c) => c.to_rgb(),
            Self::Rec2020(c) => c.to_rgb(),
            Self::A98Rgb(c) => c.to_rgb(),
            Self::ProPhotoRgb(c) => c.to_rgb(),
            Self::Cielab(c) => c.to_rgb(),
            Self::Lch(c) => c.to_rgb(),
            Self::Oklab(c) => c.to_rgb(),
            Self::Oklch(c) => c.to_rgb(),
            Self::XyzD65(c) => c.to_rgb(),
            Self::XyzD50(c) => c.to_rgb(),
            Self::SrgbLinear(c) => c.to_rgb(),
            Self::Cmyk(c) => c.to_rgb(),
        }
    }

    /// Alpha of the wrapped color.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        match self {
            Self::Srgb(c) => c.alpha(),
            Self::Hsv(c) => c.alpha(),
            Self::Hsl(c) => c.alpha(),
            Self::Hwb(c) => c.alpha(),
            Self::DisplayP3(c) => c.alpha(),
            Self::Rec2020(c) => c.alpha(),
            Self::A98Rgb(c) => c.alpha(),
            Self::ProPhotoRgb(c) => c.alpha(),
            Self::Cielab(c) => c.alpha(),
            Self::Lch(c) => c.alpha(),
            Self::Oklab(c) => c.alpha(),
            Self::Oklch(c) => c.alpha(),
            Self::XyzD65(c) => c.alpha(),
            Self::XyzD50(c) => c.alpha(),
            Self::SrgbLinear(c) => c.alpha(),
            Self::Cmyk(c) => c.alpha(),
        }
    }

    /// Display name of the space.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Srgb(_) => Srgb::NAME,
            Self::Hsv(_) => Hsv::NAME,
            Self::Hsl(_) => Hsl::NAME,
            Self::Hwb(_) => Hwb::NAME,
            Self::DisplayP3(_) => DisplayP3::NAME,
            Self::Rec2020(_) => Rec2020::NAME,
            Self::A98Rgb(_) => A98Rgb::NAME,
            Self::ProPhotoRgb(_) => ProPhotoRgb::NAME,
            Self::Cielab(_) => Cielab::NAME,
            Self::Lch(_) => Lch::NAME,
            Self::Oklab(_) => Oklab::NAME,
            Self::Oklch(_) => Oklch::NAME,
            Self::XyzD65(_) => XyzD65::NAME,
            Self::XyzD50(_) => XyzD50::NAME,
            Self::SrgbLinear(_) => SrgbLinear::NAME,
            Self::Cmyk(_) => Cmyk::NAME,
        }
    }
}

impl From<Srgb> for ColorSpace {
    fn from(space: Srgb) -> Self {
        Self::Srgb(space)
    }
}
