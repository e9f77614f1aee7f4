//! Product models for database operations.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::AsExpression;
use diesel::FromSqlRow;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Category assigned to a product.
///
/// Stored as lowercase text in the `product_type` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    Other,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Electronics => "electronics",
            ProductType::Clothing => "clothing",
            ProductType::Books => "books",
            ProductType::Home => "home",
            ProductType::Sports => "sports",
            ProductType::Other => "other",
        }
    }
}

impl diesel::query_builder::QueryId for ProductType {
    type QueryId = ProductType;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for ProductType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for ProductType {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "electronics" => Ok(ProductType::Electronics),
            "clothing" => Ok(ProductType::Clothing),
            "books" => Ok(ProductType::Books),
            "home" => Ok(ProductType::Home),
            "sports" => Ok(ProductType::Sports),
            "other" => Ok(ProductType::Other),
            _ => Err(format!("Unrecognized product_type: {}", s).into()),
        }
    }
}

/// Product model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub short_description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub product_type: ProductType,
    pub created_by_user_id: i64,
    pub created_at: NaiveDateTime,
    pub modified_at: Option<NaiveDateTime>,
}

/// NewProduct model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub short_description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub product_type: ProductType,
    pub created_by_user_id: i64,
}

/// UpdateProduct model overwriting the mutable product attributes.
///
/// `image_url = None` clears the stored value rather than leaving it
/// untouched; updates always carry the full field set.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct {
    pub name: String,
    pub short_description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub product_type: ProductType,
    pub modified_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_round_trip_labels() {
        for ty in [
            ProductType::Electronics,
            ProductType::Clothing,
            ProductType::Books,
            ProductType::Home,
            ProductType::Sports,
            ProductType::Other,
        ] {
            assert!(!ty.as_str().is_empty());
            assert_eq!(
                serde_json::to_string(&ty).unwrap(),
                format!("\"{}\"", ty.as_str())
            );
        }
    }
}
