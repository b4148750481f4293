use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Invite;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Invite::Table)
        .col(
            ColumnDef::new(Invite::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Invite::HouseholdId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Invite::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(
            ColumnDef::new(Invite::Token)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(Invite::InvitedBy)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Invite::Status)
                .string()
                .not_null()
                .string_len(15)
                .default("pending"),
        )
        .col(ColumnDef::new(Invite::ExpiresAt).big_integer().not_null())
        .col(ColumnDef::new(Invite::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Invite::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_invite_token")
        .table(Invite::Table)
        .unique()
        .col(Invite::Token)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_invite_token")
        .table(Invite::Table)
        .to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);
