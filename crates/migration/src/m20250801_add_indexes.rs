use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Email is the users' natural key
        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Room numbers are unique across the property
        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_room_number")
                    .table(Rooms::Table)
                    .col(Rooms::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on bookings.room_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_room_id")
                    .table(Bookings::Table)
                    .col(Bookings::RoomId)
                    .to_owned(),
            )
            .await?;

        // The availability overlap scan filters by status and date bounds
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status_dates")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .col(Bookings::CheckInDate)
                    .col(Bookings::CheckOutDate)
                    .to_owned(),
            )
            .await?;

        // Index on payments.booking_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_payments_booking_id")
                    .table(Payments::Table)
                    .col(Payments::BookingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_payments_booking_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_bookings_status_dates").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_bookings_room_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_rooms_room_number").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_users_email").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Email,
}

#[derive(Iden)]
enum Rooms {
    Table,
    RoomNumber,
}

#[derive(Iden)]
enum Bookings {
    Table,
    RoomId,
    Status,
    CheckInDate,
    CheckOutDate,
}

#[derive(Iden)]
enum Payments {
    Table,
    BookingId,
}
