mod device_card;

pub use device_card::DeviceCard;
