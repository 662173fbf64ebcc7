pub mod hsv_gradient;
