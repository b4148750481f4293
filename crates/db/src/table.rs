use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Household {
    Table,
    Id,
    Name,
    Settings,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    HouseholdId,
    Role,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    HouseholdId,
    Title,
    Description,
    Servings,
    PrepTime,
    CookTime,
    TotalTime,
    Cuisine,
    Tags,
    Ingredients,
    Steps,
    ImageUrl,
    SourceUrl,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Plan {
    Table,
    Id,
    HouseholdId,
    WeekStart,
    WeekEnd,
    Days,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Pantry {
    Table,
    Id,
    HouseholdId,
    Item,
    Quantity,
    Unit,
    Category,
    LastUpdated,
}

/// Household-scoped ingredient registry fed by recipe saves.
#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    HouseholdId,
    Name,
    Category,
    DefaultUnit,
    CreatedAt,
}

/// Global bilingual catalog.
#[derive(Iden, Clone)]
pub enum MasterIngredient {
    Table,
    Id,
    CanonicalKey,
    NameEn,
    NameNl,
    Synonyms,
    Category,
    DefaultUnit,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingList {
    Table,
    Id,
    HouseholdId,
    PlanId,
    Items,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Invite {
    Table,
    Id,
    HouseholdId,
    Email,
    Token,
    InvitedBy,
    Status,
    ExpiresAt,
    CreatedAt,
}
