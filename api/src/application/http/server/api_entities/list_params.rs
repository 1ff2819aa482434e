use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Keep only the most recent `limit` entries.
    #[schema(example = 10)]
    pub limit: Option<usize>,
}

impl ListParams {
    /// Collections are stored oldest first, so the tail is the most recent.
    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(limit) = self.limit {
            let skip = items.len().saturating_sub(limit);
            items.drain(..skip);
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_keeps_tail() {
        let params = ListParams { limit: Some(2) };
        assert_eq!(params.apply(vec![1, 2, 3]), vec![2, 3]);
        assert_eq!(params.apply(vec![1]), vec![1]);
        assert_eq!(ListParams::default().apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
