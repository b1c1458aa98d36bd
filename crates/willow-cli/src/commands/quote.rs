use clap::Args;
use willow_core::{
    Clock, DailyQuotes, Database, MemoryStore, QuoteBook, SettingsStore, SystemClock, TimePeriod,
    ValidationError,
};

#[derive(Args)]
pub struct QuoteArgs {
    /// Period to show (morning, day, evening, night); defaults to now
    #[arg(long, short)]
    period: Option<TimePeriod>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// The persistent store, or an in-memory one when the database is unusable.
fn open_store() -> Box<dyn SettingsStore> {
    match Database::open() {
        Ok(db) => Box::new(db),
        Err(e) => {
            tracing::warn!(error = %e, "settings database unavailable, quote rotation will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

pub fn run(args: QuoteArgs) -> willow_core::Result<()> {
    let store = open_store();
    let quotes = DailyQuotes::new(QuoteBook::builtin(), store.as_ref(), SystemClock);
    let period = args.period.unwrap_or_else(|| quotes.current_period());

    let Some(quote) = quotes.todays_quote(period)? else {
        return Err(
            ValidationError::invalid("period", format!("no quotes for {period}")).into(),
        );
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("\"{}\"", quote.text);
        println!("  -- {}", quote.author);
    }
    Ok(())
}

pub fn run_period() -> willow_core::Result<()> {
    println!("{}", SystemClock.current_period());
    Ok(())
}
