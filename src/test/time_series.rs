#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        errors::{Error, InvalidDateError},
        models::TimeSeries,
        services::ExchangeRate,
        test::mock::{
            MockSource, date, eur_time_series, eur_usd_time_series, params, rendered, tomorrow,
            yesterday,
        },
    };

    const DATES: [&str; 7] = [
        "2021-10-19",
        "2021-10-20",
        "2021-10-21",
        "2021-10-22",
        "2021-10-23",
        "2021-10-24",
        "2021-10-25",
    ];

    fn rendered_column(series: &TimeSeries, currency: &str) -> Vec<String> {
        series
            .values()
            .map(|rates| rates[currency].to_string())
            .collect()
    }

    #[tokio::test]
    async fn rates_for_a_single_currency() {
        let exchange_rate = ExchangeRate::new(MockSource::returning(eur_time_series()));

        let series = exchange_rate
            .exchange_rate_between_date_range("GBP", "EUR", date(2021, 10, 19), date(2021, 10, 25))
            .await
            .unwrap();

        assert_eq!(series.keys().collect::<Vec<_>>(), DATES);
        assert_eq!(
            rendered(&series["2021-10-19"]),
            [("EUR".to_string(), "1.186206".to_string())]
        );
        assert_eq!(
            rendered_column(&series, "EUR"),
            ["1.186206", "1.18663", "1.18649", "1.181421", "1.181848", "1.1813", "1.186176"]
        );
        assert_eq!(
            exchange_rate.source().requests(),
            [(
                "/timeseries".to_string(),
                params(&[
                    ("base", "GBP"),
                    ("start_date", "2021-10-19"),
                    ("end_date", "2021-10-25"),
                    ("symbols", "EUR"),
                ])
            )]
        );
    }

    #[tokio::test]
    async fn rates_for_multiple_currencies() {
        let exchange_rate = ExchangeRate::new(MockSource::returning(eur_usd_time_series()));

        let series = exchange_rate
            .exchange_rate_between_date_range(
                "GBP",
                ["EUR", "USD"],
                date(2021, 10, 19),
                date(2021, 10, 25),
            )
            .await
            .unwrap();

        assert_eq!(series.len(), 7);
        assert_eq!(
            rendered(&series["2021-10-22"]),
            [
                ("EUR".to_string(), "1.181421".to_string()),
                ("USD".to_string(), "1.375148".to_string()),
            ]
        );
        assert_eq!(exchange_rate.source().requests()[0].1[3].1, "EUR,USD");
    }

    #[tokio::test]
    async fn converted_values_for_a_single_currency() {
        let exchange_rate = ExchangeRate::new(MockSource::returning(eur_time_series()));

        let series = exchange_rate
            .convert_between_date_range(100, "GBP", "EUR", date(2021, 10, 19), date(2021, 10, 25))
            .await
            .unwrap();

        assert_eq!(series.keys().collect::<Vec<_>>(), DATES);
        assert!(series.values().all(|rates| rates.len() == 1));
        assert_eq!(
            rendered_column(&series, "EUR"),
            [
                "118.62060000",
                "118.66300000",
                "118.64900000",
                "118.14210000",
                "118.18480000",
                "118.13000000",
                "118.61760000",
            ]
        );
    }

    #[tokio::test]
    async fn converted_values_for_multiple_currencies() {
        let exchange_rate = ExchangeRate::new(MockSource::returning(eur_usd_time_series()));

        let series = exchange_rate
            .convert_between_date_range(
                100,
                "GBP",
                vec!["EUR", "USD"],
                date(2021, 10, 19),
                date(2021, 10, 25),
            )
            .await
            .unwrap();

        assert_eq!(
            rendered_column(&series, "USD"),
            [
                "138.12270000",
                "138.22780000",
                "137.84470000",
                "137.51480000",
                "137.58650000",
                "137.51720000",
                "137.73040000",
            ]
        );
        assert_eq!(series["2021-10-25"]["EUR"].to_string(), "118.61760000");
    }

    async fn assert_rejected(start: NaiveDate, end: NaiveDate, expected: InvalidDateError) {
        let exchange_rate = ExchangeRate::new(MockSource::never());

        let rates = exchange_rate
            .exchange_rate_between_date_range("GBP", "EUR", start, end)
            .await;
        assert!(matches!(rates, Err(Error::InvalidDate(ref e)) if *e == expected));

        let converted = exchange_rate
            .convert_between_date_range(100, "GBP", "EUR", start, end)
            .await;
        assert!(matches!(converted, Err(Error::InvalidDate(ref e)) if *e == expected));

        assert!(exchange_rate.source().requests().is_empty());
    }

    #[tokio::test]
    async fn future_start_date_is_rejected() {
        let start = tomorrow();
        let end = start.succ_opt().unwrap();
        assert_rejected(start, end, InvalidDateError::NotInPast).await;
    }

    #[tokio::test]
    async fn future_end_date_is_rejected() {
        assert_rejected(yesterday(), tomorrow(), InvalidDateError::NotInPast).await;
    }

    #[tokio::test]
    async fn end_date_before_start_date_is_rejected() {
        let start = yesterday();
        let end = start.pred_opt().unwrap();
        assert_rejected(start, end, InvalidDateError::StartAfterEnd).await;
    }
}
