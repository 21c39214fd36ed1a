use super::paginator::Paginator;
use super::row::Row;

/// One normalized read result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    pub rows: Vec<Row>,
    /// Total matching items across all pages. Falls back to `rows.len()`
    /// when the backend sent no pagination metadata.
    pub total_items: usize,
    /// False when the backend returned the whole dataset in one go.
    pub paginated: bool,
}

impl PageResult {
    pub fn new(rows: Vec<Row>, total_items: Option<usize>) -> Self {
        match total_items {
            Some(total_items) => Self {
                rows,
                total_items,
                paginated: true,
            },
            None => Self::unpaginated(rows),
        }
    }

    /// Whole dataset, paged locally.
    pub fn unpaginated(rows: Vec<Row>) -> Self {
        Self {
            total_items: rows.len(),
            rows,
            paginated: false,
        }
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        Paginator::total_pages_for(self.total_items, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_metadata_means_whole_dataset() {
        let rows: Vec<Row> = (1..=12).map(|i| Row::new(i.to_string())).collect();
        let page = PageResult::new(rows, None);
        assert!(!page.paginated);
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages(5), 3);

        let page = PageResult::new(Vec::new(), Some(0));
        assert!(page.paginated);
        assert_eq!(page.total_pages(10), 1);
    }
}
