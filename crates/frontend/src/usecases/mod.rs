pub mod u601_serial_filter;
