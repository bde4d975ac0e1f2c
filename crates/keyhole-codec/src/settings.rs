use typed_builder::TypedBuilder;

/// The 62 alphanumeric characters, the alphabet of the reference deployment.
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Minimum code length of the reference deployment.
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Configures a [`Codec`][crate::Codec] instance.
///
/// The settings are consumed once at construction; the codec derives its
/// separator set, guard set, and working alphabet from them and is
/// immutable afterwards. Changing the salt invalidates every previously
/// issued code.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CodecSettings {
    /// Ordered set of distinct ASCII symbols used for output characters.
    #[builder(default = DEFAULT_ALPHABET.to_owned(), setter(into))]
    pub alphabet: String,
    /// Secret value that parameterizes the per-call alphabet permutation.
    #[builder(setter(into))]
    pub salt: String,
    /// Encoded output is never shorter than this.
    #[builder(default = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,
}
