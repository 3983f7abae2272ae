mod common;

use api::gql::build_schema;
use common::*;
use mongodb::bson::oid::ObjectId;

#[tokio::test]
async fn test_director_movies_returns_exactly_dependent_movies() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let director_id = create_test_director(&app_state, "Nolan", 54).await;
    create_test_movie(&app_state, "Tenet", "Sci-Fi", None, Some(director_id)).await;
    create_test_movie(&app_state, "Dunkirk", "War", None, Some(director_id)).await;
    // A movie by someone else must not show up
    create_test_movie(&app_state, "Heat", "Crime", None, None).await;

    let query = format!(
        r#"
        query {{
            director(id: "{}") {{
                movies {{
                    name
                }}
            }}
        }}
        "#,
        director_id.to_hex()
    );

    let response = execute_graphql(&schema, &query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let movies = data["director"]["movies"].as_array().unwrap();

    assert_eq!(movies.len(), 2);
    for name in ["Tenet", "Dunkirk"] {
        assert!(
            movies.iter().any(|m| m["name"] == name),
            "expected {name} in {movies:?}"
        );
    }

    // Adding one more dependent movie grows the set by one
    create_test_movie(&app_state, "Oppenheimer", "Drama", None, Some(director_id)).await;

    let response = execute_graphql(&schema, &query, None).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(data["director"]["movies"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_director_without_movies_resolves_empty_list() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let director_id = create_test_director(&app_state, "Tarkovsky", 54).await;

    let query = format!(
        r#"
        query {{
            director(id: "{}") {{
                movies {{
                    id
                }}
            }}
        }}
        "#,
        director_id.to_hex()
    );

    let response = execute_graphql(&schema, &query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert!(data["director"]["movies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_movie_director_resolves_referenced_document() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let director_id = create_test_director(&app_state, "Villeneuve", 57).await;
    let movie_id = create_test_movie(&app_state, "Dune", "Sci-Fi", None, Some(director_id)).await;

    let query = format!(
        r#"
        query {{
            movie(id: "{}") {{
                name
                director {{
                    id
                    name
                    age
                }}
            }}
        }}
        "#,
        movie_id.to_hex()
    );

    let response = execute_graphql(&schema, &query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["movie"]["director"]["id"], director_id.to_hex());
    assert_eq!(data["movie"]["director"]["name"], "Villeneuve");
    assert_eq!(data["movie"]["director"]["age"], 57);
}

#[tokio::test]
async fn test_add_movie_with_nonexistent_director_is_accepted() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    // The reference is stored without any existence check
    let mutation = format!(
        r#"
        mutation {{
            addMovie(name: "Orphan", genre: "Drama", watched: false, directorId: "{}") {{
                id
                director {{
                    id
                }}
            }}
        }}
        "#,
        ObjectId::new().to_hex()
    );

    let response = execute_graphql(&schema, &mutation, None).await;

    assert!(
        response.errors.is_empty(),
        "dangling directorId should be accepted silently: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    assert!(data["addMovie"]["director"].is_null());
}

#[tokio::test]
async fn test_deleting_director_leaves_dangling_reference() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    // create Director {name: "Nolan", age: 54}
    let response = execute_graphql(
        &schema,
        r#"mutation { addDirector(name: "Nolan", age: 54) { id name age } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["addDirector"]["name"], "Nolan");
    assert_eq!(data["addDirector"]["age"], 54);
    let director_id = data["addDirector"]["id"].as_str().unwrap().to_string();

    // create Movie {name: "Tenet", ...} referencing it
    let mutation = format!(
        r#"
        mutation {{
            addMovie(name: "Tenet", genre: "Sci-Fi", rate: 8, watched: true, directorId: "{director_id}") {{
                id
            }}
        }}
        "#
    );
    let response = execute_graphql(&schema, &mutation, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let movie_id = response.data.into_json().unwrap()["addMovie"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // director(D1) { movies { name } } lists Tenet
    let query = format!(r#"query {{ director(id: "{director_id}") {{ movies {{ name }} }} }}"#);
    let response = execute_graphql(&schema, &query, None).await;
    let data = response.data.into_json().unwrap();
    let movies = data["director"]["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["name"], "Tenet");

    // delete the director
    let mutation = format!(r#"mutation {{ deleteDirector(id: "{director_id}") {{ id }} }}"#);
    let response = execute_graphql(&schema, &mutation, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    // the movie survives, its director field resolves to null
    let query = format!(r#"query {{ movie(id: "{movie_id}") {{ name director {{ id }} }} }}"#);
    let response = execute_graphql(&schema, &query, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["movie"]["name"], "Tenet");
    assert!(
        data["movie"]["director"].is_null(),
        "dangling reference must resolve to null, not an error"
    );
}

#[tokio::test]
async fn test_directors_movies_resolve_for_multiple_parents() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let first = create_test_director(&app_state, "Scott", 86).await;
    let second = create_test_director(&app_state, "Mann", 81).await;
    create_test_movie(&app_state, "Alien", "Horror", None, Some(first)).await;
    create_test_movie(&app_state, "Heat", "Crime", None, Some(second)).await;
    create_test_movie(&app_state, "Collateral", "Thriller", None, Some(second)).await;

    let response = execute_graphql(
        &schema,
        r#"query { directors { name movies { name } } }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let directors = data["directors"].as_array().unwrap();

    let scott = directors.iter().find(|d| d["name"] == "Scott").unwrap();
    let mann = directors.iter().find(|d| d["name"] == "Mann").unwrap();

    assert_eq!(scott["movies"].as_array().unwrap().len(), 1);
    assert_eq!(mann["movies"].as_array().unwrap().len(), 2);
}
