//! Random primitives used to synthesize product fields.

use std::ops::RangeInclusive;

use fake::faker::lorem::fr_fr::Word;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const IMAGE_SIZE: RangeInclusive<u32> = 1..=1024;

/// Placeholder image services, `{w}`/`{h}` are substituted with the image size.
const IMAGE_URL_FORMATS: [&str; 3] = [
    "https://dummyimage.com/{w}x{h}",
    "https://placekitten.com/{w}/{h}",
    "https://picsum.photos/{w}/{h}",
];

/// The source of randomness a product is built from.
pub trait FakeProvider {
    /// Uniform integer in `range`, bounds included.
    fn random_int(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Uniform pick from `elements`.
    ///
    /// # Panics
    /// Panics when `elements` is empty
    fn random_element<'a, T>(&mut self, elements: &'a [T]) -> &'a T;

    /// Replaces each `?` in `pattern` with an uppercase letter and each `#` with a digit.
    /// Every other character is copied as is.
    fn bothify(&mut self, pattern: &str) -> String;

    fn word(&mut self) -> String;

    /// A `/`-rooted path `depth` directories deep ending in a file with `extension`.
    fn file_path(&mut self, depth: usize, extension: &str) -> String;

    fn image_url(&mut self) -> String;
}

/// [`FakeProvider`] drawing French words, backed by any [`Rng`].
#[derive(Debug)]
pub struct FrenchFaker<R> {
    rng: R,
}

impl<R: Rng> FrenchFaker<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        FrenchFaker { rng }
    }
}

impl FrenchFaker<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        FrenchFaker::new(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        FrenchFaker::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FakeProvider for FrenchFaker<R> {
    fn random_int(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    fn random_element<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        &elements[self.rng.gen_range(0..elements.len())]
    }

    fn bothify(&mut self, pattern: &str) -> String {
        pattern
            .chars()
            .map(|c| match c {
                '?' => char::from(*self.random_element(LETTERS)),
                '#' => char::from(b'0' + self.rng.gen_range(0..10u8)),
                other => other,
            })
            .collect()
    }

    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn file_path(&mut self, depth: usize, extension: &str) -> String {
        let mut path = String::new();
        for _ in 0..depth {
            path.push('/');
            path.push_str(&self.word());
        }
        path.push('/');
        path.push_str(&self.word());
        path.push('.');
        path.push_str(extension);
        path
    }

    fn image_url(&mut self) -> String {
        let format = *self.random_element(&IMAGE_URL_FORMATS);
        let width = self.random_int(IMAGE_SIZE);
        let height = self.random_int(IMAGE_SIZE);
        format
            .replace("{w}", &width.to_string())
            .replace("{h}", &height.to_string())
    }
}

/// Checks `value` against a [`FakeProvider::bothify`] pattern.
#[must_use]
pub fn matches_pattern(pattern: &str, value: &str) -> bool {
    value.len() == pattern.len()
        && pattern.bytes().zip(value.bytes()).all(|(p, v)| match p {
            b'?' => v.is_ascii_uppercase(),
            b'#' => v.is_ascii_digit(),
            literal => literal == v,
        })
}
