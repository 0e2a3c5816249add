use super::comparators::{
    CalendarDateComparator, CurrencyComparator, FieldComparator, FullNameComparator,
    TextComparator, TimeOfDayComparator,
};
use chrono::FixedOffset;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Field keys with a dedicated comparison in the dashboard tables.
pub const REQ_TIME: &str = "req_time";
pub const CREATED_AT: &str = "created_at";
pub const GST: &str = "gst";
pub const TOTAL_INVOICE: &str = "total_invoice";
pub const USER_FIRST_NAME: &str = "user_first_name";
pub const USER_LAST_NAME: &str = "user_last_name";
pub const CLIENT_FIRST_NAME: &str = "client_first_name";
pub const CLIENT_LAST_NAME: &str = "client_last_name";

/// Lookup table from `selectorId` to the comparator used for that field.
///
/// Keys without an entry use the plain text comparator.
#[derive(Clone)]
pub struct ComparatorRegistry {
    comparators: HashMap<String, Arc<dyn FieldComparator>>,
    fallback: Arc<dyn FieldComparator>,
}

impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self {
            comparators: HashMap::new(),
            fallback: Arc::new(TextComparator),
        }
    }
}

impl ComparatorRegistry {
    /// Built-in comparators; times of day are displayed at `display_offset`.
    pub fn standard(display_offset: FixedOffset) -> Self {
        let user_name = Arc::new(FullNameComparator::with_prefix("user_"));
        let client_name = Arc::new(FullNameComparator::with_prefix("client_"));

        Self::default()
            .with(REQ_TIME, TimeOfDayComparator::new(display_offset))
            .with(CREATED_AT, CalendarDateComparator)
            .with(GST, CurrencyComparator)
            .with(TOTAL_INVOICE, CurrencyComparator)
            .with_shared(USER_FIRST_NAME, user_name.clone())
            .with_shared(USER_LAST_NAME, user_name)
            .with_shared(CLIENT_FIRST_NAME, client_name.clone())
            .with_shared(CLIENT_LAST_NAME, client_name)
    }

    pub fn with(
        self,
        key: impl Into<String>,
        comparator: impl FieldComparator + 'static,
    ) -> Self {
        self.with_shared(key, Arc::new(comparator))
    }

    pub fn with_shared(
        mut self,
        key: impl Into<String>,
        comparator: Arc<dyn FieldComparator>,
    ) -> Self {
        self.register(key, comparator);
        self
    }

    /// Adds or replaces the comparator for `key`.
    pub fn register(&mut self, key: impl Into<String>, comparator: Arc<dyn FieldComparator>) {
        self.comparators.insert(key.into(), comparator);
    }

    pub fn get(&self, key: &str) -> &dyn FieldComparator {
        match self.comparators.get(key) {
            Some(comparator) => comparator.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.comparators.contains_key(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.comparators.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for ComparatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
