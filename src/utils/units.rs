// 单位换算
// 接口中身高单位为分米，体重单位为百克

use serde::{Deserialize, Serialize};

pub const FEET_PER_DECIMETRE: f64 = 0.328084;
pub const POUNDS_PER_HECTOGRAM: f64 = 0.220462;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub meters: String,
    pub feet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    pub kg: String,
    pub lbs: String,
}

// 性别比例，gender_rate 为 -1 时无性别，否则为雌性的八分之几
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GenderRatio {
    Genderless,
    Ratio { male_percent: f64, female_percent: f64 },
}

pub fn convert_height(decimetres: u32) -> Height {
    Height {
        meters: format!("{:.1}", decimetres as f64 / 10.0),
        feet: format!("{:.1}", decimetres as f64 * FEET_PER_DECIMETRE),
    }
}

pub fn convert_weight(hectograms: u32) -> Weight {
    Weight {
        kg: format!("{:.1}", hectograms as f64 / 10.0),
        lbs: format!("{:.1}", hectograms as f64 * POUNDS_PER_HECTOGRAM),
    }
}

pub fn gender_ratio(gender_rate: i8) -> GenderRatio {
    if gender_rate == -1 {
        return GenderRatio::Genderless;
    }
    let female_percent = gender_rate as f64 / 8.0 * 100.0;
    GenderRatio::Ratio {
        male_percent: 100.0 - female_percent,
        female_percent,
    }
}

impl GenderRatio {
    pub fn is_genderless(&self) -> bool {
        matches!(self, GenderRatio::Genderless)
    }

    pub fn describe(&self) -> String {
        match self {
            GenderRatio::Genderless => "Genderless".to_string(),
            GenderRatio::Ratio { male_percent, female_percent } => {
                format!("♂ {}% / ♀ {}%", male_percent, female_percent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_height() {
        let h = convert_height(17);
        assert_eq!(h.meters, "1.7");
        assert_eq!(h.feet, "5.6");

        assert_eq!(convert_height(0).meters, "0.0");
    }

    #[test]
    fn test_convert_weight() {
        let w = convert_weight(905);
        assert_eq!(w.kg, "90.5");
        assert_eq!(w.lbs, "199.5");
    }

    #[test]
    fn test_gender_ratio() {
        assert_eq!(gender_ratio(-1), GenderRatio::Genderless);
        assert_eq!(
            gender_ratio(4),
            GenderRatio::Ratio { male_percent: 50.0, female_percent: 50.0 }
        );
        assert_eq!(
            gender_ratio(1),
            GenderRatio::Ratio { male_percent: 87.5, female_percent: 12.5 }
        );
        assert_eq!(
            gender_ratio(8),
            GenderRatio::Ratio { male_percent: 0.0, female_percent: 100.0 }
        );
    }

    #[test]
    fn test_gender_ratio_describe() {
        assert_eq!(gender_ratio(-1).describe(), "Genderless");
        assert_eq!(gender_ratio(1).describe(), "♂ 87.5% / ♀ 12.5%");
        assert!(gender_ratio(-1).is_genderless());
    }
}
