mod house;
mod user;
mod weekday;

pub use house::{
    Capacity, DiscountSettings, DiscountTier, EntryWindow, House, HouseId, HouseType,
    ReservationSettings, SavedEntity, Timing, WeekendType,
};
pub use user::User;
pub use weekday::{STAY_ALL_KEY, Weekday};
