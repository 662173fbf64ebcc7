use crate::core::data::colour::Colour;

/// Standard hexcone HSV to RGB conversion.
///
/// `hue` is cyclic: only its fractional part matters, so `1.0` is red again.
/// `saturation` and `value` are expected in `[0, 1]`. Channels are scaled to
/// `[0, 255]` and rounded half to even.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    if saturation == 0.0 {
        return channels_to_colour(value, value, value);
    }

    let sector_position = hue * 6.0;
    let sector = sector_position.floor();
    let f = sector_position - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => channels_to_colour(value, t, p),
        1 => channels_to_colour(q, value, p),
        2 => channels_to_colour(p, value, t),
        3 => channels_to_colour(p, q, value),
        4 => channels_to_colour(t, p, value),
        _ => channels_to_colour(value, p, q),
    }
}

fn channels_to_colour(r: f64, g: f64, b: f64) -> Colour {
    Colour {
        r: channel_to_byte(r),
        g: channel_to_byte(g),
        b: channel_to_byte(b),
    }
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}
