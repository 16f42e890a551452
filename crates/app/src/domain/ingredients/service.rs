//! Ingredients service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::ingredients::{
        data::{NewIngredient, escape_like},
        errors::IngredientsServiceError,
        records::{ImportSummary, IngredientRecord, IngredientUuid},
        repository::PgIngredientsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgIngredientsService {
    db: Db,
    repository: PgIngredientsRepository,
}

impl PgIngredientsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgIngredientsRepository::new(),
        }
    }
}

#[async_trait]
impl IngredientsService for PgIngredientsService {
    async fn list_ingredients(
        &self,
        name_prefix: Option<String>,
    ) -> Result<Vec<IngredientRecord>, IngredientsServiceError> {
        let pattern = name_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
            .map(escape_like);

        let mut tx = self.db.begin_transaction().await?;

        let ingredients = self
            .repository
            .list_ingredients(&mut tx, pattern.as_deref())
            .await?;

        tx.commit().await?;

        Ok(ingredients)
    }

    async fn get_ingredient(
        &self,
        ingredient: IngredientUuid,
    ) -> Result<IngredientRecord, IngredientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let ingredient = self.repository.get_ingredient(&mut tx, ingredient).await?;

        tx.commit().await?;

        Ok(ingredient)
    }

    async fn import_ingredients(
        &self,
        ingredients: Vec<NewIngredient>,
    ) -> Result<ImportSummary, IngredientsServiceError> {
        if !ingredients.iter().all(NewIngredient::is_valid) {
            return Err(IngredientsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;
        let mut summary = ImportSummary::default();

        for ingredient in &ingredients {
            match self.repository.insert_ingredient(&mut tx, ingredient).await? {
                Some(_) => summary.created += 1,
                None => summary.existing += 1,
            }
        }

        tx.commit().await?;

        info!(
            created = summary.created,
            existing = summary.existing,
            "imported ingredients"
        );

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait IngredientsService: Send + Sync {
    /// List ingredients whose name starts with `name_prefix`, ignoring case.
    async fn list_ingredients(
        &self,
        name_prefix: Option<String>,
    ) -> Result<Vec<IngredientRecord>, IngredientsServiceError>;

    async fn get_ingredient(
        &self,
        ingredient: IngredientUuid,
    ) -> Result<IngredientRecord, IngredientsServiceError>;

    /// Get-or-create every `(name, measurement_unit)` pair in one transaction.
    async fn import_ingredients(
        &self,
        ingredients: Vec<NewIngredient>,
    ) -> Result<ImportSummary, IngredientsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::ingredients::data::{IngredientFileFormat, parse_ingredients},
        test::{TestContext, helpers::new_ingredient},
    };

    use super::*;

    #[tokio::test]
    async fn import_reports_created_and_existing() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx
            .ingredients
            .import_ingredients(vec![new_ingredient("flour", "g"), new_ingredient("milk", "ml")])
            .await?;

        let second = ctx
            .ingredients
            .import_ingredients(vec![new_ingredient("flour", "g"), new_ingredient("flour", "kg")])
            .await?;

        assert_eq!(first, ImportSummary { created: 2, existing: 0 });
        assert_eq!(second, ImportSummary { created: 1, existing: 1 });

        Ok(())
    }

    #[tokio::test]
    async fn import_csv_counts_repeated_rows_as_existing() -> TestResult {
        let ctx = TestContext::new().await;

        let rows = parse_ingredients("flour,g\nmilk,ml\nflour,g\n", IngredientFileFormat::Csv)?;
        let summary = ctx.ingredients.import_ingredients(rows).await?;

        assert_eq!(summary, ImportSummary { created: 2, existing: 1 });
        assert_eq!(ctx.ingredients.list_ingredients(None).await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_case_insensitive_prefix() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.ingredients
            .import_ingredients(vec![
                new_ingredient("Sugar", "g"),
                new_ingredient("salt", "g"),
                new_ingredient("butter", "g"),
                new_ingredient("s_pecial", "g"),
            ])
            .await?;

        let matches = ctx.ingredients.list_ingredients(Some("S".to_string())).await?;
        let mut names: Vec<_> = matches.iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();

        assert_eq!(names, ["Sugar", "s_pecial", "salt"]);

        let literal = ctx.ingredients.list_ingredients(Some("s_".to_string())).await?;

        assert_eq!(literal.len(), 1, "underscore must not act as a wildcard");

        let all = ctx.ingredients.list_ingredients(None).await?;

        assert_eq!(all.len(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn import_rejects_invalid_entries() {
        let ctx = TestContext::new().await;

        let result = ctx
            .ingredients
            .import_ingredients(vec![new_ingredient("", "g")])
            .await;

        assert!(
            matches!(result, Err(IngredientsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_unknown_ingredient_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.ingredients.get_ingredient(IngredientUuid::new()).await;

        assert!(
            matches!(result, Err(IngredientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
