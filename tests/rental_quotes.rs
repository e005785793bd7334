//! Integration tests for rental quoting.

use jiff::civil::{Date, date};
use rust_decimal::Decimal;
use testresult::TestResult;

use rentcart::prelude::*;

fn drone(stock: u32) -> Product {
    Product {
        id: ProductId::new(21),
        name: "Drone".to_string(),
        image_url: "https://img.example/drone.jpg".to_string(),
        price: Price::from_whole(350),
        stock,
    }
}

#[test]
fn three_day_rental_of_two_units() {
    let quote = quote(
        Price::from_whole(100),
        date(2024, 1, 1),
        Some(date(2024, 1, 4)),
        2,
    );

    assert_eq!(quote.days, 3);
    assert_eq!(quote.total_price, Decimal::from(600));
}

#[test]
fn same_day_rental_costs_nothing() {
    let quote = quote(
        Price::from_whole(50),
        date(2024, 1, 5),
        Some(date(2024, 1, 5)),
        1,
    );

    assert_eq!(quote.days, 0);
    assert_eq!(quote.total_price, Decimal::ZERO);
}

#[test]
fn total_is_days_times_price_times_quantity_over_a_range() -> TestResult {
    let start = date(2024, 2, 20);
    let prices = ["0", "1", "19.99", "350", "1200.5"];

    for price in prices {
        let price: Price = price.parse()?;

        for offset in 0..15_i32 {
            let end: Date = start.checked_add(jiff::Span::new().days(offset))?;

            for quantity in 1..=4_u32 {
                let quote = quote(price, start, Some(end), quantity);
                let expected = Decimal::from(offset) * price.amount() * Decimal::from(quantity);

                assert_eq!(quote.days, offset.unsigned_abs());
                assert_eq!(quote.total_price, expected);
                assert!(quote.total_price >= Decimal::ZERO);
            }
        }
    }

    Ok(())
}

#[test]
fn ends_before_the_start_or_missing_are_free() -> TestResult {
    let start = date(2024, 6, 15);

    for offset in 1..10_i32 {
        let end = start.checked_sub(jiff::Span::new().days(offset))?;
        let quote = quote(Price::from_whole(80), start, Some(end), 2);

        assert_eq!(quote.days, 0);
        assert_eq!(quote.total_price, Decimal::ZERO);
    }

    let quote = quote(Price::from_whole(80), start, None, 2);
    assert_eq!(quote.days, 0);
    assert_eq!(quote.total_price, Decimal::ZERO);

    Ok(())
}

#[test]
fn product_page_flow_adds_the_selection_to_the_cart() -> TestResult {
    let mut selection = RentalSelection::new(drone(3), date(2024, 3, 1));

    selection.set_end_date_input("2024-03-03");
    selection.increase_quantity();
    selection.increase_quantity();
    selection.increase_quantity();

    let quote = selection.quote();
    assert_eq!(selection.quantity(), 3);
    assert_eq!(quote.days, 2);
    assert_eq!(quote.total_price, Decimal::from(2100));

    let mut store = CartStore::load(MemoryStorage::new());
    store.add(selection.to_line_item())?;

    assert_eq!(store.total(), Decimal::from(1050));

    Ok(())
}
