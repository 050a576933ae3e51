//! Input validation for new transactions.
//!
//! Turns raw form input into a `Transaction`, or reports the first problem
//! found. Checks run in a fixed order: required fields, amount, type, date.

use chrono::NaiveDate;
use log::warn;
use shared::{Transaction, TransactionForm, TransactionType};

/// Length of a zero-padded `YYYY-MM-DD` date
const ISO_DATE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),
    #[error("Amount must be numeric, got '{0}'")]
    NonNumericAmount(String),
    #[error("Type must be Income or Expense, got '{0}'")]
    InvalidType(String),
    #[error("Date must be a valid YYYY-MM-DD date, got '{0}'")]
    InvalidDate(String),
}

/// Validate raw form input and build the transaction it describes.
///
/// All fields are trimmed first. The description may be empty.
pub fn parse_transaction_form(
    form: &TransactionForm,
) -> Result<Transaction, TransactionValidationError> {
    let transaction = build_transaction(form)?;
    validate_date(&transaction.date)?;

    if transaction.amount < 0.0 {
        warn!(
            "Accepting negative amount {} for '{}' on {}",
            transaction.amount, transaction.category, transaction.date
        );
    }

    Ok(transaction)
}

/// Build a transaction to match existing records against.
///
/// Same rules as `parse_transaction_form` except the date format, so records
/// loaded with a malformed date can still be matched and removed.
pub fn parse_transaction_matcher(
    form: &TransactionForm,
) -> Result<Transaction, TransactionValidationError> {
    build_transaction(form)
}

fn build_transaction(form: &TransactionForm) -> Result<Transaction, TransactionValidationError> {
    let date = form.date.trim();
    let category = form.category.trim();
    let transaction_type = form.transaction_type.trim();
    let amount = form.amount.trim();
    let description = form.description.trim();

    for (name, value) in [
        ("date", date),
        ("category", category),
        ("type", transaction_type),
        ("amount", amount),
    ] {
        if value.is_empty() {
            return Err(TransactionValidationError::MissingField(name));
        }
    }

    let amount = parse_amount(amount)?;
    let transaction_type = parse_type(transaction_type)?;

    Ok(Transaction::new(
        date,
        category,
        transaction_type,
        amount,
        description,
    ))
}

/// Check an already-typed transaction against the same rules as form input
pub fn validate_transaction(transaction: &Transaction) -> Result<(), TransactionValidationError> {
    if transaction.date.is_empty() {
        return Err(TransactionValidationError::MissingField("date"));
    }
    if transaction.category.is_empty() {
        return Err(TransactionValidationError::MissingField("category"));
    }
    if !transaction.amount.is_finite() {
        return Err(TransactionValidationError::NonNumericAmount(
            transaction.amount.to_string(),
        ));
    }
    validate_date(&transaction.date)
}

/// Parse a numeric amount. Non-finite values are not numbers for our purposes.
pub fn parse_amount(input: &str) -> Result<f64, TransactionValidationError> {
    match input.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(TransactionValidationError::NonNumericAmount(input.to_string())),
    }
}

fn parse_type(input: &str) -> Result<TransactionType, TransactionValidationError> {
    input
        .parse::<TransactionType>()
        .map_err(|_| TransactionValidationError::InvalidType(input.to_string()))
}

/// Month filtering compares date prefixes, which only works for fixed-width dates
pub fn validate_date(date: &str) -> Result<(), TransactionValidationError> {
    let well_formed = date.len() == ISO_DATE_LEN
        && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok();
    if well_formed {
        Ok(())
    } else {
        Err(TransactionValidationError::InvalidDate(date.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(date: &str, category: &str, kind: &str, amount: &str, description: &str) -> TransactionForm {
        TransactionForm {
            date: date.to_string(),
            category: category.to_string(),
            transaction_type: kind.to_string(),
            amount: amount.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let tx = parse_transaction_form(&form(" 2024-01-05 ", " Food ", "Expense", " 20 ", " lunch "))
            .unwrap();

        assert_eq!(
            tx,
            Transaction::new("2024-01-05", "Food", TransactionType::Expense, 20.0, "lunch")
        );
    }

    #[test]
    fn test_description_may_be_empty() {
        let tx = parse_transaction_form(&form("2024-01-10", "Salary", "Income", "1000", "")).unwrap();
        assert_eq!(tx.description, "");
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let cases = [
            (form("", "Food", "Expense", "1", ""), "date"),
            (form("2024-01-01", "  ", "Expense", "1", ""), "category"),
            (form("2024-01-01", "Food", "", "1", ""), "type"),
            (form("2024-01-01", "Food", "Expense", "", ""), "amount"),
        ];
        for (input, field) in cases {
            assert_eq!(
                parse_transaction_form(&input),
                Err(TransactionValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn test_non_numeric_amount() {
        assert_eq!(
            parse_transaction_form(&form("2024-01-01", "Food", "Expense", "abc", "")),
            Err(TransactionValidationError::NonNumericAmount("abc".to_string()))
        );
        assert!(matches!(
            parse_transaction_form(&form("2024-01-01", "Food", "Expense", "NaN", "")),
            Err(TransactionValidationError::NonNumericAmount(_))
        ));
        assert!(matches!(
            parse_transaction_form(&form("2024-01-01", "Food", "Expense", "inf", "")),
            Err(TransactionValidationError::NonNumericAmount(_))
        ));
    }

    #[test]
    fn test_invalid_type() {
        assert_eq!(
            parse_transaction_form(&form("2024-01-01", "Bank", "Savings", "10", "")),
            Err(TransactionValidationError::InvalidType("Savings".to_string()))
        );
        assert!(matches!(
            parse_transaction_form(&form("2024-01-01", "Bank", "income", "10", "")),
            Err(TransactionValidationError::InvalidType(_))
        ));
    }

    #[test]
    fn test_amount_checked_before_type() {
        assert!(matches!(
            parse_transaction_form(&form("2024-01-01", "Bank", "Savings", "x", "")),
            Err(TransactionValidationError::NonNumericAmount(_))
        ));
    }

    #[test]
    fn test_invalid_dates() {
        for date in ["2024-1-05", "2024/01/05", "2024-02-30", "05-01-2024", "2024-01-05T10:00"] {
            assert_eq!(
                parse_transaction_form(&form(date, "Food", "Expense", "1", "")),
                Err(TransactionValidationError::InvalidDate(date.to_string())),
                "{} should be rejected",
                date
            );
        }
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        let tx = parse_transaction_form(&form("2024-01-01", "Refund", "Expense", "-5.5", "")).unwrap();
        assert_eq!(tx.amount, -5.5);
    }

    #[test]
    fn test_matcher_accepts_any_date_but_checks_other_fields() {
        let matcher = parse_transaction_matcher(&form(" January ", "Food", "Expense", "1", "")).unwrap();
        assert_eq!(
            matcher,
            Transaction::new("January", "Food", TransactionType::Expense, 1.0, "")
        );

        assert_eq!(
            parse_transaction_matcher(&form("", "Food", "Expense", "1", "")),
            Err(TransactionValidationError::MissingField("date"))
        );
        assert!(matches!(
            parse_transaction_matcher(&form("January", "Food", "Expense", "NaN", "")),
            Err(TransactionValidationError::NonNumericAmount(_))
        ));
        assert!(matches!(
            parse_transaction_matcher(&form("January", "Food", "Savings", "1", "")),
            Err(TransactionValidationError::InvalidType(_))
        ));
    }

    #[test]
    fn test_validate_transaction() {
        let ok = Transaction::new("2024-01-01", "Food", TransactionType::Expense, 1.0, "");
        assert!(validate_transaction(&ok).is_ok());

        let bad_date = Transaction::new("January", "Food", TransactionType::Expense, 1.0, "");
        assert!(matches!(
            validate_transaction(&bad_date),
            Err(TransactionValidationError::InvalidDate(_))
        ));

        let no_category = Transaction::new("2024-01-01", "", TransactionType::Expense, 1.0, "");
        assert_eq!(
            validate_transaction(&no_category),
            Err(TransactionValidationError::MissingField("category"))
        );

        let nan = Transaction::new("2024-01-01", "Food", TransactionType::Expense, f64::NAN, "");
        assert!(matches!(
            validate_transaction(&nan),
            Err(TransactionValidationError::NonNumericAmount(_))
        ));
    }
}
