use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Recipe;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::HouseholdId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Recipe::Title)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(ColumnDef::new(Recipe::Description).text())
        .col(
            ColumnDef::new(Recipe::Servings)
                .integer()
                .not_null()
                .default(2),
        )
        .col(ColumnDef::new(Recipe::PrepTime).integer())
        .col(ColumnDef::new(Recipe::CookTime).integer())
        .col(ColumnDef::new(Recipe::TotalTime).integer())
        .col(ColumnDef::new(Recipe::Cuisine).string().string_len(50))
        .col(ColumnDef::new(Recipe::Tags).text().not_null().default("[]"))
        .col(
            ColumnDef::new(Recipe::Ingredients)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(ColumnDef::new(Recipe::Steps).text().not_null().default("[]"))
        .col(ColumnDef::new(Recipe::ImageUrl).string().string_len(2048))
        .col(ColumnDef::new(Recipe::SourceUrl).string().string_len(2048))
        .col(
            ColumnDef::new(Recipe::CreatedBy)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Recipe::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_household_id")
        .table(Recipe::Table)
        .col(Recipe::HouseholdId)
        .col(Recipe::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_household_id")
        .table(Recipe::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
