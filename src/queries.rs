//! Named catalog queries over actors, movies, and castings.
//!
//! Each operation runs exactly one fixed, read-only statement and
//! returns the raw rows. Filter values are embedded literals; the caller
//! supplies only the executor. Where a query carries no `ORDER BY`, row
//! order is whatever the engine produces.

use crate::sqlite::{Error, QueryExecutor, Row};

/// Films in which Harrison Ford has appeared.
///
/// Columns: `title`.
pub fn ford_films(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT title
         FROM actors
         JOIN castings ON actors.id = castings.actor_id
         JOIN movies ON movies.id = castings.movie_id
         WHERE actors.name = 'Harrison Ford'",
    )
}

/// Films where Harrison Ford appeared but did not star.
///
/// A casting with `ord = 1` is the starring role. Columns: `title`.
pub fn ford_supporting_films(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT title
         FROM actors
         JOIN castings ON actors.id = castings.actor_id
         JOIN movies ON movies.id = castings.movie_id
         WHERE actors.name = 'Harrison Ford' AND castings.ord != 1",
    )
}

/// Title and leading star of every 1962 film.
///
/// Columns: `title`, `name`.
pub fn films_and_stars_of_1962(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT title, actors.name
         FROM actors
         JOIN castings ON actors.id = castings.actor_id
         JOIN movies ON movies.id = castings.movie_id
         WHERE movies.yr = 1962 AND castings.ord = 1",
    )
}

/// Years in which John Travolta made at least two films, with his film
/// count for each such year.
///
/// Columns: `yr`, `count`.
pub fn travoltas_busiest_years(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT yr, COUNT(*) AS count
         FROM actors
         JOIN castings ON actors.id = castings.actor_id
         JOIN movies ON movies.id = castings.movie_id
         WHERE actors.name = 'John Travolta'
         GROUP BY yr
         HAVING COUNT(*) >= 2",
    )
}

/// Each film Julie Andrews played in, together with that film's leading
/// actor.
///
/// The second join over castings picks out the `ord = 1` row of the same
/// movie, so the lead is Julie Andrews herself whenever she starred.
/// Columns: `title`, `name`.
pub fn andrews_films_and_leads(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT movies.title, stars.name
         FROM actors AS julie
         JOIN castings ON julie.id = castings.actor_id
         JOIN movies ON movies.id = castings.movie_id
         JOIN castings AS star_casting ON star_casting.movie_id = movies.id
         JOIN actors AS stars ON stars.id = star_casting.actor_id
         WHERE julie.name = 'Julie Andrews' AND star_casting.ord = 1",
    )
}

/// Actors with at least 15 starring roles, in alphabetical order.
///
/// Columns: `name`.
pub fn prolific_actors(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT actors.name
         FROM actors
         JOIN castings ON castings.actor_id = actors.id
         WHERE castings.ord = 1
         GROUP BY actors.name
         HAVING COUNT(*) >= 15
         ORDER BY actors.name",
    )
}

/// Films released in 1978, ordered by cast size (largest first), then by
/// title.
///
/// Columns: `title`, `cast_size`.
pub fn films_by_cast_size(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT movies.title, COUNT(*) AS cast_size
         FROM movies
         JOIN castings ON castings.movie_id = movies.id
         WHERE movies.yr = 1978
         GROUP BY movies.id
         ORDER BY cast_size DESC, movies.title",
    )
}

/// Everyone who has appeared in a film alongside Art Garfunkel, in
/// alphabetical order.
///
/// Art Garfunkel himself is excluded; a colleague's name repeats once
/// per shared film. Columns: `name`.
pub fn colleagues_of_garfunkel(db: &dyn QueryExecutor) -> Result<Vec<Row>, Error> {
    db.execute(
        "SELECT actors.name
         FROM actors
         JOIN castings ON castings.actor_id = actors.id
         JOIN castings AS garfunkel_casting
           ON garfunkel_casting.movie_id = castings.movie_id
         JOIN actors AS garfunkel ON garfunkel.id = garfunkel_casting.actor_id
         WHERE garfunkel.name = 'Art Garfunkel'
           AND actors.name != 'Art Garfunkel'
         ORDER BY actors.name",
    )
}
