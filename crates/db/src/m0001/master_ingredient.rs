use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::MasterIngredient;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MasterIngredient::Table)
        .col(
            ColumnDef::new(MasterIngredient::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(MasterIngredient::CanonicalKey)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(MasterIngredient::NameEn)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(MasterIngredient::NameNl)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(MasterIngredient::Synonyms)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(MasterIngredient::Category)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(
            ColumnDef::new(MasterIngredient::DefaultUnit)
                .string()
                .string_len(15),
        )
        .col(
            ColumnDef::new(MasterIngredient::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MasterIngredient::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MasterIngredient::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_master_ingredient_key")
        .table(MasterIngredient::Table)
        .unique()
        .col(MasterIngredient::CanonicalKey)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_master_ingredient_key")
        .table(MasterIngredient::Table)
        .to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);
