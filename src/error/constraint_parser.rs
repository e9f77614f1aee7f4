/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured (entity, field, value) information from the
/// constraint names and `DETAIL: Key (field)=(value)` lines Postgres
/// attaches to violation errors.
pub struct ConstraintParser;

impl ConstraintParser {
    /// Parses a unique constraint violation message.
    ///
    /// Constraint names follow the Postgres default of
    /// `{table}_{column}_key`, e.g. `users_email_key`; composite keys such
    /// as `cart_items_user_id_product_id_key` fall back to the full column
    /// list as the field.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name
            && let Some((entity, field)) = Self::parse_constraint_name(constraint, "_key")
        {
            let value = Self::extract_value_from_message(message)
                .unwrap_or_else(|| "duplicate_value".to_string());
            return Some((entity, field, value));
        }

        // Fallback: take field and value from the DETAIL line directly
        let (field, value) = Self::extract_key_value_from_message(message)?;
        Some(("resource".to_string(), field, value))
    }

    /// Parses a foreign key constraint violation message.
    ///
    /// Handles names like `cart_items_product_id_fkey` and extracts the
    /// referencing entity, the field, and the rejected value.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name
            && let Some((entity, field)) = Self::parse_constraint_name(constraint, "_fkey")
        {
            let value = Self::extract_value_from_message(message)
                .unwrap_or_else(|| "invalid_reference".to_string());
            return Some((entity, field, value));
        }

        let (field, value) = Self::extract_key_value_from_message(message)?;
        Some(("resource".to_string(), field, value))
    }

    /// Parses a not null constraint violation message.
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let field = Self::extract_quoted_after(message, "column ")?;
        let entity = Self::extract_quoted_after(message, "relation ")
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Parses a check constraint violation message.
    ///
    /// Check constraints follow `{table}_{column}_check`, e.g.
    /// `cart_items_quantity_check`.
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(constraint) = constraint_name
            && let Some(parsed) = Self::parse_constraint_name(constraint, "_check")
        {
            return Some(parsed);
        }

        let entity = Self::extract_quoted_after(message, "relation ")?;
        Some((entity, "value".to_string()))
    }

    /// Splits a default-named constraint into (table, column list).
    ///
    /// Table names here may themselves contain underscores
    /// (`cart_items_user_id_product_id_key`), so the known table names are
    /// tried longest-first before falling back to a single-segment table.
    fn parse_constraint_name(constraint_name: &str, suffix: &str) -> Option<(String, String)> {
        let stem = constraint_name.strip_suffix(suffix)?;

        for table in ["cart_items", "products", "users"] {
            if let Some(rest) = stem.strip_prefix(table)
                && let Some(field) = rest.strip_prefix('_')
            {
                return Some((table.to_string(), field.to_string()));
            }
        }

        let (entity, field) = stem.split_once('_')?;
        Some((entity.to_string(), field.to_string()))
    }

    /// Extracts the (field, value) pair from a `Key (field)=(value)` DETAIL line.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        let rest = message.split_once("Key (")?.1;
        let (field, rest) = rest.split_once(")=(")?;
        let (value, _) = rest.split_once(')')?;
        Some((field.to_string(), value.to_string()))
    }

    /// Extracts just the value from a `Key (field)=(value)` DETAIL line.
    pub fn extract_value_from_message(message: &str) -> Option<String> {
        Self::extract_key_value_from_message(message).map(|(_, value)| value)
    }

    /// Returns the first double-quoted token following `marker`.
    fn extract_quoted_after(message: &str, marker: &str) -> Option<String> {
        let rest = message.split_once(marker)?.1;
        let rest = rest.strip_prefix('"')?;
        let (token, _) = rest.split_once('"')?;
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_email() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(test@example.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_email_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "email".to_string(),
                "test@example.com".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_composite_cart_key() {
        let message = "duplicate key value violates unique constraint \"cart_items_user_id_product_id_key\"\nDETAIL: Key (user_id, product_id)=(2, 5) already exists.";
        let result = ConstraintParser::parse_unique_violation(
            message,
            Some("cart_items_user_id_product_id_key"),
        );
        assert_eq!(
            result,
            Some((
                "cart_items".to_string(),
                "user_id_product_id".to_string(),
                "2, 5".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (username)=(john_doe) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "username".to_string(),
                "john_doe".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"cart_items\" violates foreign key constraint \"cart_items_product_id_fkey\"\nDETAIL: Key (product_id)=(999) is not present in table \"products\".";
        let result =
            ConstraintParser::parse_foreign_key_violation(message, Some("cart_items_product_id_fkey"));
        assert_eq!(
            result,
            Some((
                "cart_items".to_string(),
                "product_id".to_string(),
                "999".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_foreign_key_violation_restrict_delete() {
        let message = "update or delete on table \"products\" violates foreign key constraint \"cart_items_product_id_fkey\" on table \"cart_items\"\nDETAIL: Key (id)=(5) is still referenced from table \"cart_items\".";
        let result =
            ConstraintParser::parse_foreign_key_violation(message, Some("cart_items_product_id_fkey"));
        assert_eq!(
            result,
            Some((
                "cart_items".to_string(),
                "product_id".to_string(),
                "5".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"email\" of relation \"users\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message);
        assert_eq!(result, Some(("users".to_string(), "email".to_string())));
    }

    #[test]
    fn test_parse_check_violation() {
        let message = "new row for relation \"cart_items\" violates check constraint \"cart_items_quantity_check\"";
        let result =
            ConstraintParser::parse_check_violation(message, Some("cart_items_quantity_check"));
        assert_eq!(
            result,
            Some(("cart_items".to_string(), "quantity".to_string()))
        );
    }

    #[test]
    fn test_extract_key_value_from_message() {
        let message = "Key (user_id)=(123) is not present in table";
        let result = ConstraintParser::extract_key_value_from_message(message);
        assert_eq!(result, Some(("user_id".to_string(), "123".to_string())));
    }

    #[test]
    fn test_graceful_parsing_failures() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(
            ConstraintParser::parse_foreign_key_violation(message, None),
            None
        );
        assert_eq!(ConstraintParser::parse_not_null_violation(message), None);
        assert_eq!(ConstraintParser::parse_check_violation(message, None), None);
    }
}
