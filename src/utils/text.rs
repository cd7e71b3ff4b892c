// 文本格式化工具
// 名称显示、编号补零、接口描述文本清理、图片地址

use lazy_static::lazy_static;
use regex::Regex;

const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";
const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

lazy_static! {
    static ref CONTROL_CHARS: Regex = Regex::new(r"[\n\x0C\r]").expect("静态正则");
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("静态正则");
}

/// "mr-mime" -> "Mr Mime"
///
/// 按连字符拆分，每段首字母大写，以空格连接。
pub fn format_display_name(raw: &str) -> String {
    raw.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 编号左侧补零到3位，超过3位不截断
pub fn zero_pad_id(id: u32) -> String {
    format!("{:03}", id)
}

/// 清理接口返回的描述文本：去掉换行/换页/回车，合并连续空白，去掉首尾空白
pub fn clean_display_text(raw: &str) -> String {
    let without_controls = CONTROL_CHARS.replace_all(raw, " ");
    WHITESPACE_RUN
        .replace_all(&without_controls, " ")
        .trim()
        .to_string()
}

pub fn artwork_url(id: u32) -> String {
    format!("{}/{}.png", ARTWORK_BASE, id)
}

pub fn sprite_url(id: u32) -> String {
    format!("{}/{}.png", SPRITE_BASE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_name() {
        assert_eq!(format_display_name("charizard"), "Charizard");
        assert_eq!(format_display_name("mr-mime"), "Mr Mime");
        assert_eq!(format_display_name("special-attack"), "Special Attack");
        assert_eq!(format_display_name(""), "");
    }

    #[test]
    fn test_zero_pad_id() {
        assert_eq!(zero_pad_id(1), "001");
        assert_eq!(zero_pad_id(25), "025");
        assert_eq!(zero_pad_id(150), "150");
        assert_eq!(zero_pad_id(1025), "1025");
    }

    #[test]
    fn test_clean_display_text() {
        let raw = "When several of\nthese POKéMON\x0Cgather, their\r\nelectricity could\n\nbuild.  ";
        assert_eq!(
            clean_display_text(raw),
            "When several of these POKéMON gather, their electricity could build."
        );
        assert_eq!(clean_display_text("   "), "");
    }

    #[test]
    fn test_image_urls() {
        assert!(artwork_url(25).ends_with("/other/official-artwork/25.png"));
        assert!(sprite_url(25).ends_with("/sprites/pokemon/25.png"));
    }
}
