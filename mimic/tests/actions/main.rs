mod most_recent;
