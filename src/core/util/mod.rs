pub mod hsv_to_rgb;
