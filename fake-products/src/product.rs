use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::GenError;
use crate::faker::{matches_pattern, FakeProvider};

/// Column names of the product file, in output order.
pub const HEADERS: [&str; 7] = [
    "id",
    "title",
    "gender_id",
    "composition",
    "sleeve",
    "photo",
    "url",
];

pub const ID_PATTERN: &str = "??###-##-?#?";
pub const TITLE_PREFIX: &str = "Polo";
pub const PHOTO_DEPTH: usize = 3;
pub const PHOTO_EXTENSION: &str = "jpg";

// Widths of the columns in the product table the file is imported into.
pub const ID_WIDTH: usize = 20;
pub const TITLE_WIDTH: usize = 100;
pub const COMPOSITION_WIDTH: usize = 20;
pub const SLEEVE_WIDTH: usize = 20;
pub const PHOTO_WIDTH: usize = 150;
pub const URL_WIDTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderId {
    Man,
    Wom,
    Boy,
    Gir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fabric {
    Coton,
    Elasthanne,
    Polyester,
    Laine,
    Polyamide,
    Lyocell,
}

/// A share of a single fabric, written as `"{percent}% {fabric}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    percent: u32,
    fabric: Fabric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sleeve {
    #[serde(rename = "Manches courtes")]
    Short,
    #[serde(rename = "Manches longues")]
    Long,
    #[serde(rename = "Manches aux coudes")]
    Elbow,
}

/// Raw row as found in a product file. Every column may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub gender_id: Option<String>,
    pub composition: Option<String>,
    pub sleeve: Option<String>,
    pub photo: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub gender_id: GenderId,
    pub composition: Composition,
    pub sleeve: Sleeve,
    pub photo: String,
    pub url: String,
}

impl ProductId {
    #[must_use]
    pub fn fake<P: FakeProvider>(provider: &mut P) -> Self {
        ProductId(provider.bothify(ID_PATTERN))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = GenError;
    fn try_from(id: String) -> Result<Self, Self::Error> {
        if matches_pattern(ID_PATTERN, &id) {
            Ok(ProductId(id))
        } else {
            Err(GenError::InvalidId(id))
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl GenderId {
    pub const ALL: [GenderId; 4] = [GenderId::Man, GenderId::Wom, GenderId::Boy, GenderId::Gir];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GenderId::Man => "MAN",
            GenderId::Wom => "WOM",
            GenderId::Boy => "BOY",
            GenderId::Gir => "GIR",
        }
    }
}

impl FromStr for GenderId {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenderId::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| GenError::InvalidGender(s.to_string()))
    }
}

impl Fabric {
    pub const ALL: [Fabric; 6] = [
        Fabric::Coton,
        Fabric::Elasthanne,
        Fabric::Polyester,
        Fabric::Laine,
        Fabric::Polyamide,
        Fabric::Lyocell,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Fabric::Coton => "Coton",
            Fabric::Elasthanne => "Elasthanne",
            Fabric::Polyester => "Polyester",
            Fabric::Laine => "Laine",
            Fabric::Polyamide => "Polyamide",
            Fabric::Lyocell => "Lyocell",
        }
    }
}

impl FromStr for Fabric {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fabric::ALL
            .into_iter()
            .find(|fabric| fabric.as_str() == s)
            .ok_or_else(|| GenError::InvalidComposition(s.to_string()))
    }
}

impl Composition {
    pub const PERCENT_MIN: u32 = 1;
    pub const PERCENT_MAX: u32 = 100;

    /// # Errors
    /// Errors when `percent` is outside of `1..=100`
    pub fn new(percent: u32, fabric: Fabric) -> Result<Self, GenError> {
        if (Self::PERCENT_MIN..=Self::PERCENT_MAX).contains(&percent) {
            Ok(Composition { percent, fabric })
        } else {
            Err(GenError::InvalidComposition(format!(
                "{}% {}",
                percent,
                fabric.as_str()
            )))
        }
    }

    #[must_use]
    pub fn fake<P: FakeProvider>(provider: &mut P) -> Self {
        let fabric = *provider.random_element(&Fabric::ALL);
        let percent = provider.random_int(Self::PERCENT_MIN..=Self::PERCENT_MAX);
        Composition { percent, fabric }
    }

    #[must_use]
    pub fn percent(self) -> u32 {
        self.percent
    }

    #[must_use]
    pub fn fabric(self) -> Fabric {
        self.fabric
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}", self.percent, self.fabric.as_str())
    }
}

impl FromStr for Composition {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GenError::InvalidComposition(s.to_string());
        let (percent, fabric) = s.split_once("% ").ok_or_else(invalid)?;
        if percent.is_empty() || percent.len() > 3 || !percent.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let percent = percent.parse().map_err(|_| invalid())?;
        let fabric = fabric.parse().map_err(|_| invalid())?;
        Composition::new(percent, fabric).map_err(|_| invalid())
    }
}

impl Serialize for Composition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Sleeve {
    pub const ALL: [Sleeve; 3] = [Sleeve::Short, Sleeve::Long, Sleeve::Elbow];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sleeve::Short => "Manches courtes",
            Sleeve::Long => "Manches longues",
            Sleeve::Elbow => "Manches aux coudes",
        }
    }
}

impl FromStr for Sleeve {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sleeve::ALL
            .into_iter()
            .find(|sleeve| sleeve.as_str() == s)
            .ok_or_else(|| GenError::InvalidSleeve(s.to_string()))
    }
}

impl Product {
    /// Draws every field independently from `provider`.
    #[must_use]
    pub fn fake<P: FakeProvider>(provider: &mut P) -> Self {
        let id = ProductId::fake(provider);
        let title = format!("{} {} {}", TITLE_PREFIX, provider.word(), provider.word());
        let gender_id = *provider.random_element(&GenderId::ALL);
        let composition = Composition::fake(provider);
        let sleeve = *provider.random_element(&Sleeve::ALL);
        let photo = provider.file_path(PHOTO_DEPTH, PHOTO_EXTENSION);
        let url = provider.image_url();
        Product {
            id,
            title,
            gender_id,
            composition,
            sleeve,
            photo,
            url,
        }
    }

    /// Whether every column fits the width of the product table.
    #[must_use]
    pub fn fits_columns(&self) -> bool {
        self.id.as_str().chars().count() <= ID_WIDTH
            && self.title.chars().count() <= TITLE_WIDTH
            && self.composition.to_string().chars().count() <= COMPOSITION_WIDTH
            && self.sleeve.as_str().chars().count() <= SLEEVE_WIDTH
            && self.photo.chars().count() <= PHOTO_WIDTH
            && self.url.chars().count() <= URL_WIDTH
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, GenError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(GenError::MissingField(field))
}

impl TryFrom<ProductRecord> for Product {
    type Error = GenError;
    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::try_from(required(record.id, "id")?)?,
            title: required(record.title, "title")?,
            gender_id: required(record.gender_id, "gender_id")?.parse()?,
            composition: required(record.composition, "composition")?.parse()?,
            sleeve: required(record.sleeve, "sleeve")?.parse()?,
            photo: required(record.photo, "photo")?,
            url: required(record.url, "url")?,
        })
    }
}
