pub mod u501_classify_email;
