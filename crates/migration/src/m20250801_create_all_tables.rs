use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("Guest"),
                    )
                    .col(ColumnDef::new(Users::Phone).string())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::RoomNumber).string().not_null())
                    .col(ColumnDef::new(Rooms::RoomType).string().not_null())
                    .col(
                        ColumnDef::new(Rooms::PricePerNight)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rooms::MaxGuests).integer().not_null())
                    .col(ColumnDef::new(Rooms::Description).text())
                    .col(
                        ColumnDef::new(Rooms::AvailabilityStatus)
                            .string()
                            .not_null()
                            .default("Available"),
                    )
                    .col(ColumnDef::new(Rooms::Amenities).text())
                    .col(ColumnDef::new(Rooms::Photos).text())
                    .col(ColumnDef::new(Rooms::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Rooms::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create bookings table
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bookings::UserId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::RoomId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::CheckInDate).date().not_null())
                    .col(ColumnDef::new(Bookings::CheckOutDate).date().not_null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Bookings::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Bookings::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-room_id")
                            .from(Bookings::Table, Bookings::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create payments table
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Payments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Payments::BookingId).uuid().not_null())
                    .col(
                        ColumnDef::new(Payments::Amount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::Method).string().not_null())
                    .col(
                        ColumnDef::new(Payments::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Payments::TransactionId).string())
                    .col(ColumnDef::new(Payments::ProcessedAt).timestamp())
                    .col(ColumnDef::new(Payments::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Payments::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-booking_id")
                            .from(Payments::Table, Payments::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    FullName,
    Email,
    PasswordHash,
    Role,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    RoomNumber,
    RoomType,
    PricePerNight,
    MaxGuests,
    Description,
    AvailabilityStatus,
    Amenities,
    Photos,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Bookings {
    Table,
    Id,
    UserId,
    RoomId,
    CheckInDate,
    CheckOutDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Payments {
    Table,
    Id,
    BookingId,
    Amount,
    Method,
    Status,
    TransactionId,
    ProcessedAt,
    CreatedAt,
    UpdatedAt,
}
