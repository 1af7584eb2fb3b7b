use std::ops::Range;

/// Time-of-day bracket of the regulated tariff's demand curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    /// 00:00 - 07:00
    Night,
    /// 07:00 - 10:00
    Morning,
    /// 10:00 - 14:00
    MiddayPeak,
    /// 14:00 - 18:00
    Afternoon,
    /// 18:00 - 22:00
    EveningPeak,
    /// 22:00 - 24:00
    LateEvening,
}

impl DayPeriod {
    /// Returns the bracket containing `hour`, or `None` outside 0-23.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            0..=6 => Some(Self::Night),
            7..=9 => Some(Self::Morning),
            10..=13 => Some(Self::MiddayPeak),
            14..=17 => Some(Self::Afternoon),
            18..=21 => Some(Self::EveningPeak),
            22..=23 => Some(Self::LateEvening),
            _ => None,
        }
    }

    /// Hours covered by this bracket
    pub fn hours(&self) -> Range<u32> {
        match self {
            Self::Night => 0..7,
            Self::Morning => 7..10,
            Self::MiddayPeak => 10..14,
            Self::Afternoon => 14..18,
            Self::EveningPeak => 18..22,
            Self::LateEvening => 22..24,
        }
    }

    /// Range (€/kWh) the mock source draws this bracket's prices from
    pub fn price_band(&self) -> Range<f64> {
        match self {
            Self::Night => 0.08..0.12,
            Self::Morning | Self::Afternoon | Self::LateEvening => 0.15..0.20,
            Self::MiddayPeak => 0.22..0.30,
            Self::EveningPeak => 0.25..0.35,
        }
    }

    /// Short advice shown in the "right now" card
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Night => {
                "Estás en horario valle 🌙 Los precios suelen ser más bajos durante la noche."
            }
            Self::Morning => {
                "Estás en horario de mañana ☕ Los precios suelen ser medios en este horario."
            }
            Self::MiddayPeak => "Estás en horario punta de mañana ⚡ Los precios suelen ser altos.",
            Self::Afternoon => {
                "Estás en horario de tarde 🕒 Los precios suelen ser medios en este horario."
            }
            Self::EveningPeak => {
                "Estás en horario punta de tarde ⚡ Los precios suelen ser más altos."
            }
            Self::LateEvening => "Estás en horario de noche 🌆 Los precios empiezan a bajar.",
        }
    }

    /// All brackets in hour order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Night,
            Self::Morning,
            Self::MiddayPeak,
            Self::Afternoon,
            Self::EveningPeak,
            Self::LateEvening,
        ]
    }
}
