//! ISO 3166-1 alpha-2 country codes.
//!
//! Codes are stored in their canonical uppercase form. Raw strings are
//! uppercased before the lookup, so `"us"`, `"Us"` and `"US"` all normalize to
//! [`CountryCode::US`].

use crate::domain::normalize::Normalize;
use crate::domain::record::WireEnum;
use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! country_codes {
    ($($code:ident),+ $(,)?) => {
        /// An officially assigned ISO 3166-1 alpha-2 code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum CountryCode {
            $($code),+
        }

        impl WireEnum for CountryCode {
            const VARIANTS: &'static [Self] = &[$(Self::$code),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$code => stringify!($code)),+
                }
            }
        }
    };
}

country_codes! {
    AD, AE, AF, AG, AI, AL, AM, AO, AQ, AR, AS, AT, AU, AW, AX, AZ,
    BA, BB, BD, BE, BF, BG, BH, BI, BJ, BL, BM, BN, BO, BQ, BR, BS, BT, BV, BW, BY, BZ,
    CA, CC, CD, CF, CG, CH, CI, CK, CL, CM, CN, CO, CR, CU, CV, CW, CX, CY, CZ,
    DE, DJ, DK, DM, DO, DZ,
    EC, EE, EG, EH, ER, ES, ET,
    FI, FJ, FK, FM, FO, FR,
    GA, GB, GD, GE, GF, GG, GH, GI, GL, GM, GN, GP, GQ, GR, GS, GT, GU, GW, GY,
    HK, HM, HN, HR, HT, HU,
    ID, IE, IL, IM, IN, IO, IQ, IR, IS, IT,
    JE, JM, JO, JP,
    KE, KG, KH, KI, KM, KN, KP, KR, KW, KY, KZ,
    LA, LB, LC, LI, LK, LR, LS, LT, LU, LV, LY,
    MA, MC, MD, ME, MF, MG, MH, MK, ML, MM, MN, MO, MP, MQ, MR, MS, MT, MU, MV, MW, MX, MY, MZ,
    NA, NC, NE, NF, NG, NI, NL, NO, NP, NR, NU, NZ,
    OM,
    PA, PE, PF, PG, PH, PK, PL, PM, PN, PR, PS, PT, PW, PY,
    QA,
    RE, RO, RS, RU, RW,
    SA, SB, SC, SD, SE, SG, SH, SI, SJ, SK, SL, SM, SN, SO, SR, SS, ST, SV, SX, SY, SZ,
    TC, TD, TF, TG, TH, TJ, TK, TL, TM, TN, TO, TR, TT, TV, TW, TZ,
    UA, UG, UM, US, UY, UZ,
    VA, VC, VE, VG, VI, VN, VU,
    WF, WS,
    YE, YT,
    ZA, ZM, ZW,
}

impl Normalize<CountryCode> for CountryCode {
    fn normalize(self) -> Result<CountryCode, ValidationError> {
        Ok(self)
    }
}

impl Normalize<CountryCode> for &str {
    fn normalize(self) -> Result<CountryCode, ValidationError> {
        CountryCode::from_wire(&self.to_ascii_uppercase()).ok_or_else(|| {
            ValidationError::NotInEnumeration {
                field: String::new(),
                value: self.to_string(),
            }
        })
    }
}

impl Normalize<CountryCode> for String {
    fn normalize(self) -> Result<CountryCode, ValidationError> {
        Normalize::<CountryCode>::normalize(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Normalize::<Self>::normalize(s)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Normalize::<Self>::normalize(raw).map_err(serde::de::Error::custom)
    }
}
