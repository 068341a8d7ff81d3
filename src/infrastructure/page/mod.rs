pub mod html_page;
