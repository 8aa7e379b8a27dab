mod device_list;

pub use device_list::DeviceList;
