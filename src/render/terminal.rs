use std::{borrow::Cow, fmt::Write};

use crate::{
    config::Config,
    render::{
        view::{PageView, SummaryView},
        EDIT_REVIEW, LOADING, NO_EDITIONS, NO_IMAGE, NO_REVIEWS, WRITE_REVIEW,
    },
};

pub fn render_page(view: &PageView, config: &Config) -> Result<String, std::fmt::Error> {
    let mut f = String::new();
    let Some(book) = &view.book else {
        writeln!(f, "{}", config.output_placeholder.format_str(LOADING))?;
        return Ok(f);
    };

    writeln!(f, "{}", config.output_title.format_str(printable(&book.title)))?;
    writeln!(
        f,
        "{} {}",
        config.output_author.format_str(printable(&book.author_name)),
        config.output_link.format_str(printable(&book.author_href))
    )?;
    writeln!(f, "{}", config.output_genre.format_str(printable(&book.genres)))?;
    writeln!(f, "{}", config.output_rating.format_str(printable(&book.average_rating)))?;
    match &book.image_url {
        Some(url) => writeln!(f, "{}", config.output_cover.format_str(printable(url)))?,
        None => writeln!(f, "{}", config.output_placeholder.format_str(NO_IMAGE))?,
    }

    writeln!(f)?;
    writeln!(f, "{}", config.output_heading.format_str("Editions"))?;
    let editions: Vec<Vec<String>> = book
        .editions
        .iter()
        .map(|row| row.iter().map(|x| printable(x).into_owned()).collect())
        .collect();
    let widths = column_widths(&book.edition_columns, &editions);
    writeln!(
        f,
        "{}",
        config
            .output_edition
            .format_vec(&pad_row(&book.edition_columns, &widths))
    )?;
    if editions.is_empty() {
        writeln!(f, "{}", config.output_placeholder.format_str(NO_EDITIONS))?;
    }
    for row in &editions {
        writeln!(f, "{}", config.output_edition.format_vec(&pad_row(row, &widths)))?;
    }

    writeln!(f)?;
    match &book.user_review {
        Some(review) => {
            writeln!(f, "{}", config.output_heading.format_str("Your Review"))?;
            writeln!(f, "{}", config.output_review.format_str(printable(&review.rating)))?;
            if !review.text.is_empty() {
                writeln!(f, "{}", printable(&review.text))?;
            }
            writeln!(
                f,
                "{} {}",
                EDIT_REVIEW,
                config.output_link.format_str(printable(&book.review_href))
            )?;
        }
        None => writeln!(
            f,
            "{} {}",
            WRITE_REVIEW,
            config.output_link.format_str(printable(&book.review_href))
        )?,
    }

    writeln!(f)?;
    writeln!(f, "{}", config.output_heading.format_str("Reviews"))?;
    if book.reviews.is_empty() {
        writeln!(f, "{}", config.output_placeholder.format_str(NO_REVIEWS))?;
    }
    for review in &book.reviews {
        writeln!(
            f,
            "{} {}",
            config.output_username.format_str(printable(&review.username)),
            config.output_link.format_str(printable(&review.user_href))
        )?;
        writeln!(f, "  {}", config.output_review.format_str(printable(&review.rating)))?;
        if !review.text.is_empty() {
            writeln!(f, "  {}", printable(&review.text))?;
        }
    }
    Ok(f)
}

pub fn render_index(books: &[SummaryView], config: &Config) -> Result<String, std::fmt::Error> {
    let mut f = String::new();
    if books.is_empty() {
        writeln!(f, "{}", config.output_placeholder.format_str("No books yet"))?;
    }
    for book in books {
        writeln!(
            f,
            "{} {} {} {}",
            config.output_title.format_str(printable(&book.title)),
            config.output_link.format_str(printable(&book.href)),
            config.output_author.format_str(printable(&book.author_name)),
            config.output_rating.format_str(printable(&book.average_rating)),
        )?;
    }
    Ok(f)
}

/// `text` without control characters, so server data can't drive the terminal.
/// Line breaks are kept and tabs become spaces.
fn printable(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_control() && c != '\n') {
        return Cow::Borrowed(text);
    }
    text.chars()
        .filter_map(|c| match c {
            '\n' => Some(c),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .chain(std::iter::once(h))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or_default()
        })
        .collect()
}

fn pad_row(row: &[String], widths: &[usize]) -> Vec<String> {
    row.iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect()
}
