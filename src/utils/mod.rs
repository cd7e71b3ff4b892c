// 工具模块 - 显示格式化与单位换算

pub mod text;
pub mod units;

pub use text::{artwork_url, clean_display_text, format_display_name, sprite_url, zero_pad_id};
pub use units::{convert_height, convert_weight, gender_ratio, GenderRatio, Height, Weight};
