use forkplan_db::table::{Household, Invite, User};
use forkplan_shared::household::{HouseholdSettings, Role};
use rand::seq::IndexedRandom;
use sea_query::{Expr, ExprTrait, OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use validator::Validate;

#[derive(Clone)]
pub struct Command(pub forkplan_shared::State);

impl Deref for Command {
    type Target = forkplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct InviteInput {
    #[validate(email)]
    pub email: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub email: String,
    pub token: String,
    pub expires_at: i64,
}

const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn invite_token() -> String {
    let mut rng = rand::rng();

    (0..32)
        .filter_map(|_| TOKEN_ALPHABET.choose(&mut rng))
        .map(|b| char::from(*b))
        .collect()
}

impl Command {
    /// Inserts the user unless it already exists.
    pub async fn ensure_user(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let name: String = name.into();
        let email: String = email.into();

        let (sql, values) = sea_query::Query::insert()
            .into_table(User::Table)
            .columns([
                User::Id,
                User::Name,
                User::Email,
                User::Role,
                User::CreatedAt,
            ])
            .values_panic([
                id.into(),
                name.into(),
                email.into(),
                Role::Member.to_string().into(),
                forkplan_shared::now().into(),
            ])
            .on_conflict(OnConflict::column(User::Id).do_nothing().to_owned())
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    /// Creates a household and makes `user_id` its owner.
    pub async fn create(
        &self,
        mut input: CreateInput,
        user_id: impl Into<String>,
    ) -> forkplan_shared::Result<String> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let user_id: String = user_id.into();
        let id = ulid::Ulid::new().to_string();
        let now = forkplan_shared::now();
        let mut tx = self.write_db.begin().await?;

        let (sql, values) = sea_query::Query::insert()
            .into_table(Household::Table)
            .columns([
                Household::Id,
                Household::Name,
                Household::Settings,
                Household::CreatedAt,
                Household::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.name.into(),
                serde_json::to_string(&HouseholdSettings::default())?.into(),
                now.into(),
                now.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = sea_query::Query::update()
            .table(User::Table)
            .values([
                (User::HouseholdId, id.to_owned().into()),
                (User::Role, Role::Owner.to_string().into()),
            ])
            .and_where(Expr::col(User::Id).eq(&user_id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            forkplan_shared::not_found!("User");
        }

        tx.commit().await?;

        tracing::info!(household_id = %id, user_id = %user_id, "household created");

        Ok(id)
    }

    /// Replaces the settings of `household_id`, which must be the caller's own household.
    pub async fn update_settings(
        &self,
        household_id: impl Into<String>,
        settings: HouseholdSettings,
        session_household_id: &str,
    ) -> forkplan_shared::Result<()> {
        let household_id: String = household_id.into();
        if household_id != session_household_id {
            forkplan_shared::forbidden!("Forbidden");
        }

        let (sql, values) = sea_query::Query::update()
            .table(Household::Table)
            .values([
                (Household::Settings, serde_json::to_string(&settings)?.into()),
                (Household::UpdatedAt, forkplan_shared::now().into()),
            ])
            .and_where(Expr::col(Household::Id).eq(&household_id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;
        if result.rows_affected() == 0 {
            forkplan_shared::not_found!("Household");
        }

        Ok(())
    }

    /// Records a pending invite. No mail is sent; the invitation is logged.
    pub async fn invite(
        &self,
        mut input: InviteInput,
        household_id: impl Into<String>,
        invited_by: impl Into<String>,
    ) -> forkplan_shared::Result<Invitation> {
        input.email = input.email.trim().to_lowercase();
        input.validate()?;

        let household_id: String = household_id.into();
        let invited_by: String = invited_by.into();
        let now = forkplan_shared::now();
        let invitation = Invitation {
            id: ulid::Ulid::new().to_string(),
            email: input.email,
            token: invite_token(),
            expires_at: now + crate::INVITE_TTL_DAYS * 24 * 60 * 60,
        };

        let (sql, values) = sea_query::Query::insert()
            .into_table(Invite::Table)
            .columns([
                Invite::Id,
                Invite::HouseholdId,
                Invite::Email,
                Invite::Token,
                Invite::InvitedBy,
                Invite::ExpiresAt,
                Invite::CreatedAt,
            ])
            .values_panic([
                invitation.id.to_owned().into(),
                household_id.to_owned().into(),
                invitation.email.to_owned().into(),
                invitation.token.to_owned().into(),
                invited_by.into(),
                invitation.expires_at.into(),
                now.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(
            email = %invitation.email,
            household_id = %household_id,
            "invitation sent"
        );

        Ok(invitation)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn tokens_are_random_lowercase_alphanumerics() {
        let a = super::invite_token();
        let b = super::invite_token();

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_ne!(a, b);
    }
}
