//! Query parameters for the store's REST `select` endpoint.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A `select *` over one table with optional ordering and row limit.
///
/// # Example
///
/// ```rust,ignore
/// let query = Select::all()
///     .order_by("published_at", Direction::Descending)
///     .limit(10);
///
/// assert_eq!(
///     query.params(),
///     vec![
///         ("select", "*".to_string()),
///         ("order", "published_at.desc".to_string()),
///         ("limit", "10".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    order: Vec<(&'static str, Direction)>,
    limit: Option<u64>,
}

impl Select {
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds a sort key. Keys apply in the order they are added.
    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.order.push((column, direction));
        self
    }

    pub fn limit(mut self, rows: u64) -> Self {
        self.limit = Some(rows);
        self
    }

    /// Query string pairs understood by the store.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, direction)| format!("{}.{}", column, direction.as_str()))
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order", order));
        }

        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}
