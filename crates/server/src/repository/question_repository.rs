use crate::entity::question;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use trivia_core::domain::{
    AnswerText, CategoryId, Difficulty, Page, QuestionId, QuestionText, QuizCandidate, QuizRound,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl QuizCandidate for QuestionRecord {
    fn question_id(&self) -> QuestionId {
        self.id
    }

    fn category_id(&self) -> CategoryId {
        self.category
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

/// One page of questions plus the size of the whole (possibly filtered) listing.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<QuestionRecord>,
    pub total: u64,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord>;
    async fn find_by_id(&self, question_id: QuestionId) -> Result<Option<QuestionRecord>>;
    /// Returns `false` when no question had this id.
    async fn delete(&self, question_id: QuestionId) -> Result<bool>;
    async fn list_page(
        &self,
        category: Option<CategoryId>,
        page: Page,
        page_size: u64,
    ) -> Result<QuestionPage>;
    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>>;
    async fn quiz_candidates(&self, round: &QuizRound) -> Result<Vec<QuestionRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmQuestionRepository {
    db: DatabaseConnection,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: question::Model) -> Result<QuestionRecord> {
        let difficulty = Difficulty::try_from(model.difficulty).map_err(|e| {
            anyhow!(
                "invalid questions.difficulty for question {} from database: {e}",
                model.id
            )
        })?;

        Ok(QuestionRecord {
            id: QuestionId::new(model.id),
            question: model.question,
            answer: model.answer,
            category: CategoryId::new(model.category),
            difficulty,
        })
    }

    fn map_models(models: Vec<question::Model>) -> Result<Vec<QuestionRecord>> {
        models.into_iter().map(Self::map_model).collect()
    }
}

/// Builds a `%term%` pattern where the term's own wildcards match literally. Case is left
/// alone: both sides are folded by the same SQL `LOWER()`.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord> {
        let active_model = question::ActiveModel {
            question: Set(new_question.question.into_inner()),
            answer: Set(new_question.answer.into_inner()),
            category: Set(new_question.category.into_inner()),
            difficulty: Set(new_question.difficulty.value()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .context("failed to insert question")?;
        Self::map_model(model)
    }

    async fn find_by_id(&self, question_id: QuestionId) -> Result<Option<QuestionRecord>> {
        let model = question::Entity::find_by_id(question_id.into_inner())
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }

    async fn delete(&self, question_id: QuestionId) -> Result<bool> {
        let result = question::Entity::delete_by_id(question_id.into_inner())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn list_page(
        &self,
        category: Option<CategoryId>,
        page: Page,
        page_size: u64,
    ) -> Result<QuestionPage> {
        let mut query = question::Entity::find().order_by_asc(question::Column::Id);
        if let Some(category) = category {
            query = query.filter(question::Column::Category.eq(category.into_inner()));
        }

        let paginator = query.paginate(&self.db, page_size);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.index()).await?;

        Ok(QuestionPage {
            questions: Self::map_models(models)?,
            total,
        })
    }

    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>> {
        // LOWER(question) LIKE LOWER(pattern) ESCAPE '\'
        let pattern = SimpleExpr::Binary(
            Box::new(Func::lower(Expr::val(contains_pattern(term))).into()),
            BinOper::Escape,
            Box::new(SimpleExpr::Constant('\\'.into())),
        );
        let matches_term = Expr::expr(Func::lower(Expr::col((
            question::Entity,
            question::Column::Question,
        ))))
        .binary(BinOper::Like, pattern);

        let models = question::Entity::find()
            .filter(matches_term)
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Self::map_models(models)
    }

    async fn quiz_candidates(&self, round: &QuizRound) -> Result<Vec<QuestionRecord>> {
        let mut query = question::Entity::find().order_by_asc(question::Column::Id);
        if let Some(category) = round.category().category_id() {
            query = query.filter(question::Column::Category.eq(category.into_inner()));
        }

        let previous: Vec<i32> = round.previous().map(i32::from).collect();
        if !previous.is_empty() {
            query = query.filter(question::Column::Id.is_not_in(previous));
        }

        let models = query.all(&self.db).await?;
        Self::map_models(models)
    }
}
