use thirtyfour::{error::WebDriverResult, DesiredCapabilities, WebDriver};

/// Fetches the rendered page source of a url through a browser session.
/// Every call gets its own session and closes it before returning, so no
/// cached state survives between fetches.
pub async fn fetch_page_source(webdriver_url: &str, url: &str, headless: bool) -> Option<String> {
    let driver = match new_session(webdriver_url, headless).await {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Failed to start a browser session: {:?}", e);
            return None;
        }
    };

    let page_source = navigate_and_capture(&driver, url).await;

    if let Err(e) = driver.quit().await {
        log::error!("Failed to close browser session: {:?}", e);
    }

    match page_source {
        Ok(html) => Some(html),
        Err(e) => {
            log::error!("Failed to fetch page {}. Error: {:?}", url, e);
            None
        }
    }
}

async fn new_session(webdriver_url: &str, headless: bool) -> WebDriverResult<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();
    if headless {
        caps.set_headless()?;
    }

    WebDriver::new(webdriver_url, caps).await
}

async fn navigate_and_capture(driver: &WebDriver, url: &str) -> WebDriverResult<String> {
    driver.goto(url).await?;
    driver.source().await
}
