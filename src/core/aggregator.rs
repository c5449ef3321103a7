use crate::core::{Item, Result};
use crate::utils::error::PriceError;

/// Sums the prices of `items`. Empty input yields 0. Addition is checked:
/// leaving the `i64` range fails with [`PriceError::Overflow`] instead of
/// wrapping, reporting the running total and the label of the item that
/// could not be added.
pub fn total_price(items: &[Item]) -> Result<i64> {
    let mut total: i64 = 0;

    for item in items {
        total = total
            .checked_add(item.price)
            .ok_or_else(|| PriceError::Overflow {
                total,
                label: item.label.clone(),
            })?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("item1", 10),
            Item::new("item2", 20),
            Item::new("item3", 30),
        ]
    }

    #[test]
    fn test_empty_sequence_sums_to_zero() {
        assert_eq!(total_price(&[]).unwrap(), 0);
    }

    #[test]
    fn test_sample_items_sum() {
        assert_eq!(total_price(&sample_items()).unwrap(), 60);
    }

    #[test]
    fn test_order_independence() {
        let mut items = sample_items();
        let forward = total_price(&items).unwrap();
        items.reverse();
        assert_eq!(total_price(&items).unwrap(), forward);
    }

    #[test]
    fn test_negative_prices_cancel() {
        let items = vec![Item::new("a", -5), Item::new("b", 5)];
        assert_eq!(total_price(&items).unwrap(), 0);
    }

    #[test]
    fn test_zero_prices() {
        let items = vec![Item::new("free", 0), Item::new("also free", 0)];
        assert_eq!(total_price(&items).unwrap(), 0);
    }

    #[test]
    fn test_positive_overflow_is_an_error() {
        let items = vec![Item::new("max", i64::MAX), Item::new("straw", 1)];
        match total_price(&items) {
            Err(PriceError::Overflow { total, label }) => {
                assert_eq!(total, i64::MAX);
                assert_eq!(label, "straw");
            }
            other => panic!("expected overflow error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_overflow_is_an_error() {
        let items = vec![Item::new("min", i64::MIN), Item::new("debt", -1)];
        assert!(matches!(
            total_price(&items),
            Err(PriceError::Overflow { .. })
        ));
    }
}
