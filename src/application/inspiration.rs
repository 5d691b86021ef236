//! Daily inspiration use case

use crate::infrastructure::{Quote, QuoteProvider};

/// Service handing out a quote to read
pub struct InspirationService<P: QuoteProvider> {
    provider: P,
}

impl<P: QuoteProvider> InspirationService<P> {
    pub fn new(provider: P) -> Self {
        InspirationService { provider }
    }

    pub fn execute(&self) -> Quote {
        self.provider.fetch_quote()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider;

    impl QuoteProvider for StaticProvider {
        fn fetch_quote(&self) -> Quote {
            Quote {
                text: "Stay curious.".into(),
                author: "Anon".into(),
            }
        }
    }

    #[test]
    fn test_execute_returns_provider_quote() {
        let quote = InspirationService::new(StaticProvider).execute();
        assert_eq!(quote.text, "Stay curious.");
        assert_eq!(quote.author, "Anon");
    }
}
