//! Product arguments shared by `add` and `toggle`.

use clap::{ArgGroup, Args};

use wishlist_core::{Price, ProductDescriptor};

use super::CliError;

/// Product data, as a wishlist button would carry it.
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("price_input").multiple(false)))]
pub struct ProductArgs {
    /// Product id
    #[arg(long)]
    pub id: String,

    /// Display title
    #[arg(long)]
    pub title: String,

    /// Thumbnail URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// Product page URL
    #[arg(long, default_value = "")]
    pub url: String,

    /// Price in major units (e.g. 19.99)
    #[arg(long, group = "price_input")]
    pub price: Option<String>,

    /// Price in minor units (e.g. 1999)
    #[arg(long, group = "price_input", allow_negative_numbers = true)]
    pub price_minor: Option<i64>,

    /// Pre-formatted price, shown as is (e.g. "$19.99")
    #[arg(long, group = "price_input")]
    pub price_formatted: Option<String>,
}

impl ProductArgs {
    /// Build the descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if `--price` is not a decimal number.
    pub fn into_descriptor(self) -> Result<ProductDescriptor, CliError> {
        let price = match (self.price, self.price_minor, self.price_formatted) {
            (Some(major), _, _) => Some(Price::major(&major)?),
            (_, Some(minor), _) => Some(Price::Minor(minor)),
            (_, _, Some(formatted)) => Some(Price::Formatted(formatted)),
            (None, None, None) => None,
        };

        let descriptor = ProductDescriptor::new(self.id, self.title)
            .with_image(self.image)
            .with_url(self.url);
        Ok(match price {
            Some(price) => descriptor.with_price(price),
            None => descriptor,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        product: ProductArgs,
    }

    fn parse(args: &[&str]) -> Result<ProductArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .map(|cli| cli.product)
    }

    #[test]
    fn test_major_price() {
        let descriptor = parse(&["--id", "1", "--title", "Mug", "--price", "19.99"])
            .unwrap()
            .into_descriptor()
            .unwrap();
        assert_eq!(descriptor.price.unwrap().display(), "$19.99");
    }

    #[test]
    fn test_minor_price() {
        let descriptor = parse(&["--id", "1", "--title", "Mug", "--price-minor", "150"])
            .unwrap()
            .into_descriptor()
            .unwrap();
        assert_eq!(descriptor.price, Some(Price::Minor(150)));
    }

    #[test]
    fn test_no_price() {
        let descriptor = parse(&["--id", "1", "--title", "Mug"])
            .unwrap()
            .into_descriptor()
            .unwrap();
        assert_eq!(descriptor.price, None);
        assert_eq!(descriptor.image, "");
    }

    #[test]
    fn test_price_flags_are_exclusive() {
        assert!(
            parse(&[
                "--id",
                "1",
                "--title",
                "Mug",
                "--price",
                "1",
                "--price-minor",
                "100"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_bad_major_price() {
        let result = parse(&["--id", "1", "--title", "Mug", "--price", "cheap"])
            .unwrap()
            .into_descriptor();
        assert!(matches!(result, Err(CliError::Price(_))));
    }
}
